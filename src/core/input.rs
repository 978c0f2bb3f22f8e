//! Score field parsing.
//!
//! Score fields are free text. A blank field is distinct from zero (Papayoo
//! auto-complete fills exactly one blank), but anything that is not an
//! integer counts as 0.

use log::warn;

/// Parse one score field. Blank input is `None`; non-numeric input is
/// coerced to `Some(0)`.
///
/// ```
/// use scoresheet::core::input::parse_field;
///
/// assert_eq!(parse_field(" 12 "), Some(12));
/// assert_eq!(parse_field(""), None);
/// assert_eq!(parse_field("abc"), Some(0));
/// ```
#[must_use]
pub fn parse_field(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "_" {
        return None;
    }
    Some(coerce_score(trimmed))
}

/// Parse a score, coercing anything non-numeric (including blanks) to 0.
#[must_use]
pub fn coerce_score(raw: &str) -> i32 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    if let Ok(value) = trimmed.parse::<i32>() {
        return value;
    }
    // "12.0" style input truncates like a number field would round-trip
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc() as i32,
        _ => {
            warn!("non-numeric score {trimmed:?} counted as 0");
            0
        }
    }
}

/// Coerce a stored JSON value (legacy blobs hold whatever the page wrote).
#[must_use]
pub fn coerce_json_score(value: &serde_json::Value) -> i32 {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(|v| v.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
            .or_else(|| n.as_f64().map(|v| v.trunc() as i32))
            .unwrap_or(0),
        serde_json::Value::String(s) => coerce_score(s),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_field_blank_markers() {
        assert_eq!(parse_field("   "), None);
        assert_eq!(parse_field("_"), None);
        assert_eq!(parse_field("-7"), Some(-7));
    }

    #[test]
    fn test_coerce_score() {
        assert_eq!(coerce_score("42"), 42);
        assert_eq!(coerce_score("4.9"), 4);
        assert_eq!(coerce_score("NaN"), 0);
        assert_eq!(coerce_score("x1"), 0);
        assert_eq!(coerce_score(""), 0);
    }

    #[test]
    fn test_coerce_json_score() {
        assert_eq!(coerce_json_score(&json!(7)), 7);
        assert_eq!(coerce_json_score(&json!(7.5)), 7);
        assert_eq!(coerce_json_score(&json!("3")), 3);
        assert_eq!(coerce_json_score(&json!(null)), 0);
        assert_eq!(coerce_json_score(&json!([1])), 0);
    }
}
