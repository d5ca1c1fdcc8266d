//! Tolerant field coercion. Nothing here fails: bad input degrades to
//! `None`, empty strings, zero or `false`.

use serde_json::Value;

/// Ids arrive as numbers or strings and are always compared as strings
pub fn coerce_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Prices keep only digits and `.` from strings, so "€120,000" reads as 120000.
/// `None` marks a price that is missing or not a finite number.
pub fn coerce_price(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let cleaned: String = s.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();
            if cleaned.is_empty() {
                None
            } else {
                cleaned.parse::<f64>().ok()
            }
        }
        _ => None,
    };
    parsed.filter(|p| p.is_finite())
}

pub fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

pub fn coerce_float(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|f| f.is_finite())
}

pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        _ => None,
    }
}

/// Strings pass through, numbers are rendered, everything else is absent
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Integer form field: keep digits and `-`, read the leading base-10 integer, default 0
pub fn form_int(input: &str) -> i64 {
    let cleaned: String = input.chars().filter(|c| c.is_ascii_digit() || *c == '-').collect();
    leading_number(&cleaned, false)
        .and_then(|s| s.parse::<i64>().ok())
        .unwrap_or(0)
}

/// Decimal form field: keep digits, `.` and `-`, read the leading decimal, default 0.0
pub fn form_float(input: &str) -> f64 {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    leading_number(&cleaned, true)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|f| f.is_finite())
        .unwrap_or(0.0)
}

/// Leading base-10 integer after optional whitespace: `"3abc"` → 3,
/// `"50.5"` → 50, `"abc"` → `None`
pub fn leading_int(input: &str) -> Option<i64> {
    leading_number(input.trim_start(), false).and_then(|s| s.parse::<i64>().ok())
}

// Longest prefix shaped like `-?\d*(\.\d*)?` that holds at least one digit
fn leading_number(s: &str, allow_fraction: bool) -> Option<&str> {
    let bytes = s.as_bytes();
    let mut end = 0;
    if bytes.first() == Some(&b'-') {
        end = 1;
    }
    let mut digits = 0;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => digits += 1,
            b'.' if allow_fraction && !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }
    Some(s[..end].trim_end_matches('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_become_strings() {
        assert_eq!(coerce_id(&json!(17)), Some("17".to_string()));
        assert_eq!(coerce_id(&json!(" a-9 ")), Some("a-9".to_string()));
        assert_eq!(coerce_id(&json!(null)), None);
        assert_eq!(coerce_id(&json!("")), None);
    }

    #[test]
    fn prices_strip_formatting() {
        assert_eq!(coerce_price(&json!(250000)), Some(250000.0));
        assert_eq!(coerce_price(&json!("€120,000")), Some(120000.0));
        assert_eq!(coerce_price(&json!("99.5")), Some(99.5));
    }

    #[test]
    fn unparseable_prices_are_flagged() {
        assert_eq!(coerce_price(&json!("Call us")), None);
        assert_eq!(coerce_price(&json!("1.2.3")), None);
        assert_eq!(coerce_price(&json!(true)), None);
        assert_eq!(coerce_price(&json!(null)), None);
    }

    #[test]
    fn ints_and_floats() {
        assert_eq!(coerce_int(&json!(3)), Some(3));
        assert_eq!(coerce_int(&json!(2.9)), Some(2));
        assert_eq!(coerce_int(&json!("4")), Some(4));
        assert_eq!(coerce_int(&json!("four")), None);
        assert_eq!(coerce_float(&json!("85.5")), Some(85.5));
        assert_eq!(coerce_float(&json!({})), None);
    }

    #[test]
    fn bools_accept_common_spellings() {
        assert_eq!(coerce_bool(&json!(true)), Some(true));
        assert_eq!(coerce_bool(&json!("False")), Some(false));
        assert_eq!(coerce_bool(&json!(1)), Some(true));
        assert_eq!(coerce_bool(&json!("maybe")), None);
    }

    #[test]
    fn form_fields_default_to_zero() {
        assert_eq!(form_int("3 rooms"), 3);
        assert_eq!(form_int("-2"), -2);
        assert_eq!(form_int("abc"), 0);
        assert_eq!(form_int(""), 0);
        assert_eq!(form_float("1,200.5"), 1200.5);
        assert_eq!(form_float("12."), 12.0);
        assert_eq!(form_float("1.2.3"), 1.2);
        assert_eq!(form_float("-"), 0.0);
    }

    #[test]
    fn leading_int_reads_prefix_only() {
        assert_eq!(leading_int("3abc"), Some(3));
        assert_eq!(leading_int(" 50.5"), Some(50));
        assert_eq!(leading_int("-4 rooms"), Some(-4));
        assert_eq!(leading_int("two"), None);
        assert_eq!(leading_int("1,200"), Some(1));
    }
}
