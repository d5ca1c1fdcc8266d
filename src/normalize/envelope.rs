use serde_json::{Map, Value};

/// Keys a loosely-typed backend uses to wrap a list, in priority order.
/// `$values` is what .NET reference-preserving serialization emits.
pub const ENVELOPE_KEYS: [&str; 4] = ["$values", "data", "result", "items"];

/// Every shape the listing endpoints are known to return
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// A bare JSON array
    List(Vec<Value>),
    /// An object carrying the array under one of [`ENVELOPE_KEYS`]
    Wrapped { key: &'static str, items: Vec<Value> },
    /// An object with no recognized envelope key
    Single(Map<String, Value>),
    /// Scalars and null
    Unknown,
}

impl Envelope {
    pub fn classify(raw: Value) -> Self {
        match raw {
            Value::Array(items) => Envelope::List(items),
            Value::Object(mut map) => {
                let key = ENVELOPE_KEYS
                    .iter()
                    .copied()
                    .find(|k| matches!(map.get(*k), Some(Value::Array(_))));
                match key.and_then(|k| map.remove(k).map(|v| (k, v))) {
                    Some((key, Value::Array(items))) => Envelope::Wrapped { key, items },
                    _ => Envelope::Single(map),
                }
            }
            _ => Envelope::Unknown,
        }
    }

    /// The carried sequence; single objects and scalars carry none
    pub fn into_items(self) -> Vec<Value> {
        match self {
            Envelope::List(items) | Envelope::Wrapped { items, .. } => items,
            Envelope::Single(_) | Envelope::Unknown => Vec::new(),
        }
    }
}
