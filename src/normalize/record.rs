use super::coerce::{coerce_bool, coerce_float, coerce_id, coerce_int, coerce_price, coerce_text};
use super::envelope::Envelope;
use super::url::{extract_url, to_absolute_url};
use crate::models::{ImageRecord, Location, PropertyRecord};
use serde_json::{Map, Value};

static NULL: Value = Value::Null;

/// Build one canonical listing from a wire object. Non-objects yield a
/// default record so a batch never loses its length.
pub fn property_from_value(value: &Value, origin: &str) -> PropertyRecord {
    let Some(map) = value.as_object() else {
        return PropertyRecord::default();
    };
    let field = |key: &str| map.get(key).unwrap_or(&NULL);
    let text = |key: &str| coerce_text(field(key));

    let id = coerce_id(field("propertyId"))
        .or_else(|| coerce_id(field("id")))
        .unwrap_or_default();

    let images_raw = match map.get("images") {
        Some(v) if !v.is_null() => v,
        _ => field("propertyImages"),
    };
    let images = images_from_field(images_raw, origin, &id);

    PropertyRecord {
        title: text("title").unwrap_or_default(),
        location: Location {
            city: text("city").unwrap_or_default(),
            address: text("address"),
            state: text("state"),
            zip_code: text("zipCode"),
            country: text("country"),
            neighborhood: text("neighborhood"),
            latitude: coerce_float(field("latitude")),
            longitude: coerce_float(field("longitude")),
        },
        price: coerce_price(field("price")),
        property_type: text("propertyType").unwrap_or_default(),
        is_for_sale: coerce_bool(field("isForSale")).unwrap_or(false),
        is_for_rent: coerce_bool(field("isForRent")).unwrap_or(false),
        is_available: coerce_bool(field("isAvailable")).unwrap_or(false),
        bedrooms: coerce_int(field("bedrooms")),
        bathrooms: coerce_int(field("bathrooms")),
        spaces: coerce_int(field("spaces")),
        floor_level: text("floorLevel"),
        square_feet: coerce_float(field("squareFeet")),
        description: text("description"),
        orientation: text("orientation"),
        heating_system: text("heatingSystem"),
        furniture: text("furniture"),
        additional_features: text("additionalFeatures"),
        builder: text("builder"),
        complex: text("complex"),
        interior_video: text("interiorVideo"),
        exterior_video: text("exteriorVideo"),
        has_ownership_document: coerce_bool(field("hasOwnershipDocument")).unwrap_or(false),
        images,
        id,
    }
}

/// One image descriptor: a bare URL string or an object. `position` is
/// 1-based and stands in for a missing id.
pub fn image_from_value(value: &Value, position: usize, origin: &str, property_id: &str) -> ImageRecord {
    let map = value.as_object();
    let image_id = map
        .and_then(|m| m.get("imageId").or_else(|| m.get("id")))
        .and_then(coerce_int)
        .unwrap_or(position as i64);
    let property_id = map
        .and_then(|m| m.get("propertyId"))
        .and_then(coerce_id)
        .unwrap_or_else(|| property_id.to_string());

    ImageRecord {
        image_id,
        image_url: to_absolute_url(&extract_url(value), origin),
        property_id,
    }
}

/// The `images` field of a property: an array, an envelope, a single
/// URL-bearing object, a comma-separated string, or nothing.
/// Entries that resolve to an empty URL are dropped.
pub fn images_from_field(raw: &Value, origin: &str, property_id: &str) -> Vec<ImageRecord> {
    let items: Vec<Value> = match raw {
        Value::String(s) => s
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| Value::String(s.to_string()))
            .collect(),
        Value::Array(_) => Envelope::classify(raw.clone()).into_items(),
        Value::Object(map) => match Envelope::classify(raw.clone()) {
            Envelope::Wrapped { items, .. } if !items.is_empty() => items,
            _ => single_image(map),
        },
        _ => Vec::new(),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| image_from_value(item, i + 1, origin, property_id))
        .filter(|img| !img.image_url.is_empty())
        .collect()
}

fn single_image(map: &Map<String, Value>) -> Vec<Value> {
    vec![Value::Object(map.clone())]
}
