//! In-memory filtering and sorting of fetched listings.

pub mod query;
pub mod sort;
pub mod view;

pub use sort::{sort_by_id, SortOrder};
pub use view::ListingView;

use crate::models::PropertyRecord;
use serde::{Deserialize, Serialize};

/// User-selected filters. Every option is optional; absent options add no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring of title or city
    pub search: Option<String>,
    /// Case-insensitive tag equality
    pub property_type: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    /// Whole-number bounds on `square_feet`, which counts as 0 when missing
    pub min_area: Option<i64>,
    pub max_area: Option<i64>,
    pub is_for_sale: Option<bool>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.search().is_none()
            && self.property_type().is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.min_area.is_none()
            && self.max_area.is_none()
            && self.is_for_sale.is_none()
    }

    /// Matched as typed: only an empty query is inactive
    fn search(&self) -> Option<String> {
        self.search.as_deref().filter(|s| !s.is_empty()).map(str::to_lowercase)
    }

    fn property_type(&self) -> Option<String> {
        non_blank(&self.property_type).map(str::to_lowercase)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

/// Keep the records matching every active option, preserving input order.
///
/// Exact-equality passes run before substring and range scans.
pub fn apply<'a>(records: &'a [PropertyRecord], criteria: &FilterCriteria) -> Vec<&'a PropertyRecord> {
    let mut result: Vec<&PropertyRecord> = records.iter().collect();

    if let Some(for_sale) = criteria.is_for_sale {
        result.retain(|p| p.is_for_sale == for_sale);
    }
    if let Some(bedrooms) = criteria.bedrooms {
        result.retain(|p| p.bedrooms == Some(bedrooms));
    }
    if let Some(bathrooms) = criteria.bathrooms {
        result.retain(|p| p.bathrooms == Some(bathrooms));
    }
    if let Some(tag) = criteria.property_type() {
        result.retain(|p| p.property_type.trim().to_lowercase() == tag);
    }
    if let Some(q) = criteria.search() {
        result.retain(|p| p.title.to_lowercase().contains(&q) || p.city().to_lowercase().contains(&q));
    }
    if criteria.min_price.is_some() || criteria.max_price.is_some() {
        result.retain(|p| {
            p.price
                .map_or(false, |price| within(price, criteria.min_price, criteria.max_price))
        });
    }
    if criteria.min_area.is_some() || criteria.max_area.is_some() {
        let (min, max) = (criteria.min_area.map(|m| m as f64), criteria.max_area.map(|m| m as f64));
        result.retain(|p| within(p.square_feet.unwrap_or(0.0), min, max));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, city: &str, kind: &str, price: Option<f64>) -> PropertyRecord {
        let mut p = PropertyRecord {
            id: id.into(),
            title: title.into(),
            property_type: kind.into(),
            price,
            ..Default::default()
        };
        p.location.city = city.into();
        p
    }

    fn sample() -> Vec<PropertyRecord> {
        let mut a = record("1", "Garden House", "Prizren", "House", Some(100.0));
        a.bedrooms = Some(3);
        a.is_for_sale = true;
        a.square_feet = Some(140.0);
        let mut b = record("2", "City Flat", "Prishtinë", "Apartment", Some(200.0));
        b.bedrooms = Some(2);
        b.square_feet = Some(70.0);
        let mut c = record("3", "Loft", "Peja", "apartment", Some(300.0));
        c.is_for_sale = true;
        let d = record("4", "Corner Store", "Prishtinë", "Store", None);
        vec![a, b, c, d]
    }

    fn ids(result: &[&PropertyRecord]) -> Vec<String> {
        result.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn empty_criteria_is_identity() {
        let records = sample();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());
        assert_eq!(ids(&apply(&records, &criteria)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let criteria = FilterCriteria {
            search: Some("x".into()),
            ..Default::default()
        };
        assert!(apply(&[], &criteria).is_empty());
    }

    #[test]
    fn price_range_is_inclusive() {
        let records = sample();
        let criteria = FilterCriteria {
            min_price: Some(150.0),
            max_price: Some(250.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &criteria)), vec!["2"]);

        let criteria = FilterCriteria {
            min_price: Some(100.0),
            max_price: Some(300.0),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &criteria)), vec!["1", "2", "3"]);
    }

    #[test]
    fn invalid_prices_never_match_a_price_bound() {
        let records = sample();
        let criteria = FilterCriteria {
            max_price: Some(1e12),
            ..Default::default()
        };
        assert!(!ids(&apply(&records, &criteria)).contains(&"4".to_string()));
    }

    #[test]
    fn property_type_ignores_case() {
        let records = sample();
        let criteria = FilterCriteria {
            property_type: Some("apartment".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &criteria)), vec!["2", "3"]);
    }

    #[test]
    fn search_checks_title_and_city() {
        let records = sample();
        let criteria = FilterCriteria {
            search: Some("PRISH".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &criteria)), vec!["2", "4"]);

        let criteria = FilterCriteria {
            search: Some("loft".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &criteria)), vec!["3"]);
    }

    #[test]
    fn search_matches_spaces_as_typed() {
        let records = sample();
        let criteria = FilterCriteria {
            search: Some(" flat".into()),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &criteria)), vec!["2"]);

        let criteria = FilterCriteria {
            search: Some("flat ".into()),
            ..Default::default()
        };
        assert!(!criteria.is_empty());
        assert!(apply(&records, &criteria).is_empty());
    }

    #[test]
    fn blank_strings_count_as_absent() {
        let records = sample();
        let criteria = FilterCriteria {
            search: Some(String::new()),
            property_type: Some("  ".into()),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(apply(&records, &criteria).len(), 4);
    }

    #[test]
    fn bedrooms_require_a_value() {
        let records = sample();
        let criteria = FilterCriteria {
            bedrooms: Some(3),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &criteria)), vec!["1"]);
    }

    #[test]
    fn missing_area_counts_as_zero() {
        let records = sample();
        let criteria = FilterCriteria {
            max_area: Some(100),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &criteria)), vec!["2", "3", "4"]);

        let criteria = FilterCriteria {
            min_area: Some(100),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &criteria)), vec!["1"]);
    }

    #[test]
    fn sale_flag_filters_both_ways() {
        let records = sample();
        let sale = FilterCriteria {
            is_for_sale: Some(true),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &sale)), vec!["1", "3"]);
        let rent = FilterCriteria {
            is_for_sale: Some(false),
            ..Default::default()
        };
        assert_eq!(ids(&apply(&records, &rent)), vec!["2", "4"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let records = sample();
        let criteria = FilterCriteria {
            search: Some("i".into()),
            max_price: Some(250.0),
            ..Default::default()
        };
        let once: Vec<PropertyRecord> = apply(&records, &criteria).into_iter().cloned().collect();
        let twice = apply(&once, &criteria);
        assert_eq!(ids(&twice), once.iter().map(|p| p.id.clone()).collect::<Vec<_>>());
    }

    #[test]
    fn no_matches_is_empty_not_error() {
        let records = sample();
        let criteria = FilterCriteria {
            property_type: Some("Castle".into()),
            ..Default::default()
        };
        assert!(apply(&records, &criteria).is_empty());
    }
}
