//! Shape-tolerant parsing of listing API responses.
//!
//! The backend wraps lists inconsistently (bare arrays, `$values`, `data`,
//! `result`, `items`) and serializes image URLs in several ways. Everything
//! here degrades to empty output instead of failing.

pub mod coerce;
pub mod envelope;
pub mod record;
pub mod url;

pub use envelope::{Envelope, ENVELOPE_KEYS};
pub use record::{image_from_value, images_from_field, property_from_value};
pub use url::{extract_url, to_absolute_url, URL_KEYS};

use crate::models::{ImageRecord, PropertyRecord};
use serde_json::Value;
use tracing::debug;

/// The sequence carried by `raw`, or empty when it carries none
pub fn normalize_list(raw: Value) -> Vec<Value> {
    let envelope = Envelope::classify(raw);
    if let Envelope::Wrapped { key, items } = &envelope {
        debug!("Unwrapped {} items from '{}' envelope", items.len(), key);
    }
    envelope.into_items()
}

/// One canonical record per element of the carried sequence
pub fn normalize_properties(raw: Value, origin: &str) -> Vec<PropertyRecord> {
    normalize_list(raw)
        .iter()
        .map(|item| property_from_value(item, origin))
        .collect()
}

/// Image sub-resource: bare or wrapped array of URL strings or objects.
/// Entries without a usable URL are dropped.
pub fn normalize_images(raw: Value, origin: &str, property_id: &str) -> Vec<ImageRecord> {
    normalize_list(raw)
        .iter()
        .enumerate()
        .map(|(i, item)| image_from_value(item, i + 1, origin, property_id))
        .filter(|img| !img.image_url.is_empty())
        .collect()
}

/// Single-resource endpoints sometimes answer with a list; take its first
/// element. Envelope keys holding an empty array are skipped, and an object
/// whose envelope arrays are all empty carries nothing.
pub fn pick_one(raw: Value) -> Option<Value> {
    match raw {
        Value::Array(items) => items.into_iter().next(),
        Value::Object(mut map) => {
            let key = ENVELOPE_KEYS
                .iter()
                .find(|k| matches!(map.get(**k), Some(Value::Array(items)) if !items.is_empty()));
            if let Some(key) = key {
                return match map.remove(*key) {
                    Some(Value::Array(items)) => items.into_iter().next(),
                    _ => None,
                };
            }
            match Envelope::classify(Value::Object(map)) {
                Envelope::Single(map) => Some(Value::Object(map)),
                _ => None,
            }
        }
        _ => None,
    }
}
