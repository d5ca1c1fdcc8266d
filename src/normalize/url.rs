use serde_json::{Map, Value};

/// Fields that carry an image URL, most specific first
pub const URL_KEYS: [&str; 5] = ["imageUrl", "url", "src", "link", "href"];

/// Pull a likely URL out of a string, a URL-bearing object, or an object
/// wrapping one one level down. Returns "" when nothing usable is found.
pub fn extract_url(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Object(map) => extract_from_object(map, true),
        _ => String::new(),
    }
}

fn extract_from_object(map: &Map<String, Value>, descend: bool) -> String {
    if let Some(url) = URL_KEYS
        .iter()
        .find_map(|k| map.get(*k).and_then(Value::as_str))
    {
        return url.to_string();
    }

    if descend {
        for key in URL_KEYS {
            if let Some(Value::Object(nested)) = map.get(key) {
                let url = extract_from_object(nested, false);
                if !url.is_empty() {
                    return url;
                }
            }
        }
    }

    if let Some(first) = map.values().find_map(Value::as_str) {
        return first.to_string();
    }

    if descend {
        for value in map.values() {
            if let Value::Object(nested) = value {
                if let Some(url) = URL_KEYS
                    .iter()
                    .find_map(|k| nested.get(*k).and_then(Value::as_str))
                {
                    return url.to_string();
                }
            }
        }
    }

    String::new()
}

/// Resolve `u` against the API origin.
///
/// Absolute (`http(s)://`, `data:`) URLs are kept, protocol-relative ones get
/// `https:`, root-relative ones get `origin`. Anything else is passed through
/// untouched.
pub fn to_absolute_url(u: &str, origin: &str) -> String {
    if u.is_empty() {
        return String::new();
    }
    let lower = u.get(..8).unwrap_or(u).to_ascii_lowercase();
    if lower.starts_with("data:") || lower.starts_with("http://") || lower.starts_with("https://") {
        return u.to_string();
    }
    if u.starts_with("//") {
        return format!("https:{u}");
    }
    if u.starts_with('/') {
        return format!("{}{u}", origin.trim_end_matches('/'));
    }
    u.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ORIGIN: &str = "https://api.example.com";

    #[test]
    fn strings_pass_through() {
        assert_eq!(extract_url(&json!("https://x/y.jpg")), "https://x/y.jpg");
    }

    #[test]
    fn priority_fields_win() {
        assert_eq!(extract_url(&json!({"imageUrl": "a.jpg"})), "a.jpg");
        assert_eq!(
            extract_url(&json!({"alt": "cover", "href": "h.jpg", "src": "s.jpg"})),
            "s.jpg"
        );
    }

    #[test]
    fn url_object_is_entered_once() {
        assert_eq!(
            extract_url(&json!({"imageUrl": {"url": "n.jpg"}})),
            "n.jpg"
        );
    }

    #[test]
    fn falls_back_to_first_string_field() {
        assert_eq!(
            extract_url(&json!({"id": 4, "path": "/up/p.jpg", "name": "p"})),
            "/up/p.jpg"
        );
    }

    #[test]
    fn finds_nested_image_url_one_level_down() {
        assert_eq!(extract_url(&json!({"foo": {"imageUrl": "b.jpg"}})), "b.jpg");
    }

    #[test]
    fn nothing_usable_is_empty() {
        assert_eq!(extract_url(&json!({})), "");
        assert_eq!(extract_url(&json!(null)), "");
        assert_eq!(extract_url(&json!(12)), "");
        assert_eq!(extract_url(&json!({"a": {"b": {"imageUrl": "deep.jpg"}}})), "");
    }

    #[test]
    fn absolute_urls() {
        assert_eq!(
            to_absolute_url("/uploads/x.jpg", ORIGIN),
            "https://api.example.com/uploads/x.jpg"
        );
        assert_eq!(to_absolute_url("https://cdn/y.jpg", ORIGIN), "https://cdn/y.jpg");
        assert_eq!(to_absolute_url("HTTP://cdn/y.jpg", ORIGIN), "HTTP://cdn/y.jpg");
        assert_eq!(to_absolute_url("data:image/png;base64,AA", ORIGIN), "data:image/png;base64,AA");
        assert_eq!(to_absolute_url("//cdn.host/z.jpg", ORIGIN), "https://cdn.host/z.jpg");
        assert_eq!(to_absolute_url("", ORIGIN), "");
        assert_eq!(to_absolute_url("photo.jpg", ORIGIN), "photo.jpg");
    }
}
