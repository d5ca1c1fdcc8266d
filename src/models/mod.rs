use serde::{Deserialize, Serialize};

pub mod form;
pub mod kind;

pub use form::{PropertyForm, PropertyPayload};
pub use kind::{Fact, FactKind, PropertyKind};

/// Where a property is and how to find it on a map
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub address: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
    pub neighborhood: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Location {
    /// Coordinates usable for a map pin. Zero means "not set" in the backend.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() && lat != 0.0 && lng != 0.0 => {
                Some((lat, lng))
            }
            _ => None,
        }
    }
}

/// A single image attached to a listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord {
    pub image_id: i64,
    /// Absolute URL, or empty when the source carried nothing usable
    pub image_url: String,
    pub property_id: String,
}

/// Canonical listing, built fresh from every API response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    /// Always a string; ids compare lexicographically
    pub id: String,
    pub title: String,
    pub location: Location,
    /// `None` flags a missing or unparseable price
    pub price: Option<f64>,
    pub property_type: String,
    pub is_for_sale: bool,
    pub is_for_rent: bool,
    pub is_available: bool,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub spaces: Option<i64>,
    pub floor_level: Option<String>,
    pub square_feet: Option<f64>,
    pub description: Option<String>,
    pub orientation: Option<String>,
    pub heating_system: Option<String>,
    pub furniture: Option<String>,
    pub additional_features: Option<String>,
    pub builder: Option<String>,
    pub complex: Option<String>,
    pub interior_video: Option<String>,
    pub exterior_video: Option<String>,
    pub has_ownership_document: bool,
    pub images: Vec<ImageRecord>,
}

impl PropertyRecord {
    pub fn city(&self) -> &str {
        &self.location.city
    }

    pub fn kind(&self) -> PropertyKind {
        PropertyKind::from_tag(&self.property_type)
    }

    /// Facts shown for this listing's kind, in display order
    pub fn facts(&self) -> Vec<Fact> {
        self.kind()
            .fact_kinds()
            .iter()
            .map(|&(kind, label)| {
                let value = match kind {
                    FactKind::Bedrooms => self.bedrooms.map(|v| v.to_string()),
                    FactKind::Bathrooms => self.bathrooms.map(|v| v.to_string()),
                    FactKind::Spaces => self.spaces.map(|v| v.to_string()),
                    FactKind::FloorLevel => self.floor_level.clone(),
                    FactKind::Area => self.square_feet.map(format_number),
                };
                Fact { kind, label, value }
            })
            .collect()
    }

    /// Price for display, "-" when the source price was invalid
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("€{}", group_thousands(price)),
            None => "-".to_string(),
        }
    }

    pub fn slug(&self) -> String {
        slugify(&self.title)
    }

    /// Public detail page path, `/properties/{slug}/{id}`
    pub fn detail_path(&self) -> String {
        format!("/properties/{}/{}", self.slug(), self.id)
    }
}

/// Lowercase, whitespace runs become `-`, anything not a word char or `-` is dropped
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        out.insert(0, '-');
    }
    out
}
