use crate::filter::{FilterCriteria, SortOrder};
use crate::models::PropertyRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Map shows at most this many pins
pub const DEFAULT_PIN_LIMIT: usize = 60;

/// Counters shown on the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingStats {
    pub total: usize,
    pub for_sale: usize,
    pub for_rent: usize,
    pub available: usize,
}

impl ListingStats {
    pub fn from_records(records: &[PropertyRecord]) -> Self {
        records.iter().fold(Self::default(), |mut stats, p| {
            stats.total += 1;
            stats.for_sale += usize::from(p.is_for_sale);
            stats.for_rent += usize::from(p.is_for_rent);
            stats.available += usize::from(p.is_available);
            stats
        })
    }
}

/// A listing placed on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPin {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub price: String,
    pub latitude: f64,
    pub longitude: f64,
    pub path: String,
}

/// Listings with real coordinates that are on the market, in fetch order
pub fn map_pins(records: &[PropertyRecord], limit: usize) -> Vec<MapPin> {
    records
        .iter()
        .filter(|p| p.is_for_sale || p.is_for_rent)
        .filter_map(|p| {
            let (latitude, longitude) = p.location.coordinates()?;
            Some(MapPin {
                id: p.id.clone(),
                title: p.title.clone(),
                kind: p.kind().display_name().to_string(),
                price: p.price_label(),
                latitude,
                longitude,
                path: p.detail_path(),
            })
        })
        .take(limit)
        .collect()
}

/// What a `list` run saw, written to disk for later inspection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSnapshot<'a> {
    pub fetched_at: DateTime<Utc>,
    pub source: &'a str,
    pub criteria: &'a FilterCriteria,
    pub sort: SortOrder,
    pub stats: ListingStats,
    pub properties: Vec<&'a PropertyRecord>,
}

impl<'a> ListingSnapshot<'a> {
    pub fn new(
        source: &'a str,
        criteria: &'a FilterCriteria,
        sort: SortOrder,
        all: &[PropertyRecord],
        visible: Vec<&'a PropertyRecord>,
    ) -> Self {
        Self {
            fetched_at: Utc::now(),
            source,
            criteria,
            sort,
            stats: ListingStats::from_records(all),
            properties: visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str, sale: bool, rent: bool, coords: Option<(f64, f64)>) -> PropertyRecord {
        let mut p = PropertyRecord {
            id: id.into(),
            title: format!("Listing {id}"),
            property_type: "office".into(),
            is_for_sale: sale,
            is_for_rent: rent,
            is_available: true,
            ..Default::default()
        };
        if let Some((lat, lng)) = coords {
            p.location.latitude = Some(lat);
            p.location.longitude = Some(lng);
        }
        p
    }

    #[test]
    fn stats_count_flags() {
        let mut records = vec![
            listing("1", true, false, None),
            listing("2", false, true, None),
            listing("3", true, false, None),
        ];
        records[2].is_available = false;
        assert_eq!(
            ListingStats::from_records(&records),
            ListingStats {
                total: 3,
                for_sale: 2,
                for_rent: 1,
                available: 2
            }
        );
    }

    #[test]
    fn listings_without_availability_flag_are_not_counted_available() {
        let records = crate::normalize::normalize_properties(
            serde_json::json!([
                {"propertyId": 1, "isAvailable": true},
                {"propertyId": 2},
                {"propertyId": 3, "isAvailable": "false"}
            ]),
            "https://api.example.com",
        );
        let stats = ListingStats::from_records(&records);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.available, 1);
    }

    #[test]
    fn pins_need_coordinates_and_a_market_flag() {
        let records = vec![
            listing("1", true, false, Some((42.6, 21.1))),
            listing("2", false, false, Some((42.6, 21.1))),
            listing("3", false, true, None),
            listing("4", false, true, Some((42.2, 20.7))),
        ];
        let pins = map_pins(&records, DEFAULT_PIN_LIMIT);
        let ids: Vec<&str> = pins.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(pins[0].kind, "Zyrë");
        assert_eq!(pins[0].path, "/properties/listing-1/1");
    }

    #[test]
    fn snapshot_serializes_visible_listings() {
        let records = vec![listing("1", true, false, None), listing("2", false, true, None)];
        let criteria = FilterCriteria {
            is_for_sale: Some(true),
            ..Default::default()
        };
        let visible = crate::filter::apply(&records, &criteria);
        let snapshot = ListingSnapshot::new("test", &criteria, SortOrder::Ascending, &records, visible);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["stats"]["total"], 2);
        assert_eq!(json["sort"], "ascending");
        assert_eq!(json["criteria"]["isForSale"], true);
        assert_eq!(json["properties"].as_array().unwrap().len(), 1);
        assert!(json["fetchedAt"].is_string());
    }

    #[test]
    fn pins_respect_limit() {
        let records: Vec<_> = (0..5)
            .map(|i| listing(&i.to_string(), true, false, Some((1.0, 1.0))))
            .collect();
        assert_eq!(map_pins(&records, 2).len(), 2);
    }
}
