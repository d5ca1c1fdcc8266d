use crate::error::FormError;
use crate::models::PropertyRecord;
use crate::normalize::coerce::{form_float, form_int};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Add/edit form as entered by an admin: every numeric field is still text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyForm {
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub neighborhood: String,
    /// "House", "Apartment", ... left empty until chosen
    pub property_type: String,
    pub is_for_sale: bool,
    pub is_for_rent: bool,
    pub is_available: bool,
    pub price: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_feet: String,
    pub spaces: String,
    pub floor_level: String,
    pub orientation: String,
    pub furniture: String,
    pub heating_system: String,
    pub additional_features: String,
    pub has_ownership_document: bool,
    pub builder: String,
    pub complex: String,
    pub latitude: String,
    pub longitude: String,
    pub exterior_video: String,
    pub interior_video: String,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: String::new(),
            neighborhood: String::new(),
            property_type: String::new(),
            is_for_sale: true,
            is_for_rent: false,
            is_available: true,
            price: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            square_feet: String::new(),
            spaces: String::new(),
            floor_level: String::new(),
            orientation: String::new(),
            furniture: String::new(),
            heating_system: String::new(),
            additional_features: String::new(),
            has_ownership_document: true,
            builder: String::new(),
            complex: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            exterior_video: String::new(),
            interior_video: String::new(),
        }
    }
}

/// Outbound POST/PUT body with numeric fields coerced
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPayload {
    pub title: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub neighborhood: String,
    pub property_type: String,
    pub is_for_sale: bool,
    pub is_for_rent: bool,
    pub is_available: bool,
    pub price: f64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub square_feet: f64,
    pub spaces: i64,
    pub floor_level: String,
    pub orientation: String,
    pub furniture: String,
    pub heating_system: String,
    pub additional_features: String,
    pub has_ownership_document: bool,
    pub builder: String,
    pub complex: String,
    pub latitude: f64,
    pub longitude: f64,
    pub exterior_video: String,
    pub interior_video: String,
}

impl PropertyForm {
    /// Prefill the edit form from an existing listing
    pub fn from_record(record: &PropertyRecord) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let num = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();
        let int = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_default();
        let location = &record.location;

        Self {
            title: record.title.clone(),
            description: text(&record.description),
            address: text(&location.address),
            city: location.city.clone(),
            state: text(&location.state),
            zip_code: text(&location.zip_code),
            country: text(&location.country),
            neighborhood: text(&location.neighborhood),
            property_type: record.property_type.clone(),
            is_for_sale: record.is_for_sale,
            is_for_rent: record.is_for_rent,
            is_available: record.is_available,
            price: num(record.price),
            bedrooms: int(record.bedrooms),
            bathrooms: int(record.bathrooms),
            square_feet: num(record.square_feet),
            spaces: int(record.spaces),
            floor_level: text(&record.floor_level),
            orientation: text(&record.orientation),
            furniture: text(&record.furniture),
            heating_system: text(&record.heating_system),
            additional_features: text(&record.additional_features),
            has_ownership_document: record.has_ownership_document,
            builder: text(&record.builder),
            complex: text(&record.complex),
            latitude: num(location.latitude),
            longitude: num(location.longitude),
            exterior_video: text(&record.exterior_video),
            interior_video: text(&record.interior_video),
        }
    }

    /// Overlay the fields present in a JSON object. Numbers given for text
    /// fields (`"price": 120000`) are taken as their decimal text.
    pub fn overlay(self, changes: Value) -> Result<Self, serde_json::Error> {
        let Value::Object(changes) = changes else {
            return Err(serde::de::Error::custom("form must be a JSON object"));
        };
        let mut merged = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => return Err(serde::de::Error::custom("form did not serialize to an object")),
        };
        for (key, value) in changes {
            let value = match (merged.get(&key), value) {
                (Some(Value::String(_)), Value::Number(n)) => Value::String(n.to_string()),
                (_, value) => value,
            };
            merged.insert(key, value);
        }
        serde_json::from_value(Value::Object(merged))
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.property_type.trim().is_empty() {
            return Err(FormError::MissingPropertyType);
        }
        Ok(())
    }

    /// Validate, trim every text field and coerce numeric ones
    pub fn to_payload(&self) -> Result<PropertyPayload, FormError> {
        self.validate()?;
        let t = |s: &str| s.trim().to_string();

        Ok(PropertyPayload {
            title: t(&self.title),
            description: t(&self.description),
            address: t(&self.address),
            city: t(&self.city),
            state: t(&self.state),
            zip_code: t(&self.zip_code),
            country: t(&self.country),
            neighborhood: t(&self.neighborhood),
            property_type: t(&self.property_type),
            is_for_sale: self.is_for_sale,
            is_for_rent: self.is_for_rent,
            is_available: self.is_available,
            price: form_float(&self.price),
            bedrooms: form_int(&self.bedrooms),
            bathrooms: form_int(&self.bathrooms),
            square_feet: form_float(&self.square_feet),
            spaces: form_int(&self.spaces),
            floor_level: t(&self.floor_level),
            orientation: t(&self.orientation),
            furniture: t(&self.furniture),
            heating_system: t(&self.heating_system),
            additional_features: t(&self.additional_features),
            has_ownership_document: self.has_ownership_document,
            builder: t(&self.builder),
            complex: t(&self.complex),
            latitude: form_float(&self.latitude),
            longitude: form_float(&self.longitude),
            exterior_video: t(&self.exterior_video),
            interior_video: t(&self.interior_video),
        })
    }
}
