//! Lenient field decoders. Backends behind the portfolio API disagree on
//! shapes: JPA sends `null` for unset columns, and the web form posts numbers
//! as strings.

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

/// Text field; `null` decodes as empty, numbers and booleans as their text.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(de::Error::custom(format!("expected text, got {other}"))),
    }
}

/// Percentage as an integer, float or numeric string, clamped to 0-100.
/// `null` and blank strings decode as 0.
pub fn percent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let value = Value::deserialize(deserializer)?;
    let number = match &value {
        Value::Null => return Ok(0),
        Value::String(s) if s.trim().is_empty() => return Ok(0),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };

    match number {
        Some(n) if n.is_finite() => Ok(n.round().clamp(0.0, 100.0) as u8),
        _ => Err(de::Error::custom(format!("expected a percentage, got {value}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(deserialize_with = "text")]
        label: String,
        #[serde(deserialize_with = "percent")]
        level: u8,
    }

    fn row(value: Value) -> Result<Row, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn percent_accepts_strings_and_clamps() {
        assert_eq!(row(json!({"label": "a", "level": "85"})).unwrap().level, 85);
        assert_eq!(row(json!({"label": "a", "level": " 42 "})).unwrap().level, 42);
        assert_eq!(row(json!({"label": "a", "level": 99.6})).unwrap().level, 100);
        assert_eq!(row(json!({"label": "a", "level": 250})).unwrap().level, 100);
        assert_eq!(row(json!({"label": "a", "level": -3})).unwrap().level, 0);
        assert_eq!(row(json!({"label": "a", "level": null})).unwrap().level, 0);
        assert!(row(json!({"label": "a", "level": "lots"})).is_err());
    }

    #[test]
    fn text_tolerates_null_and_numbers() {
        assert_eq!(row(json!({"label": null, "level": 1})).unwrap().label, "");
        assert_eq!(row(json!({"label": 2023, "level": 1})).unwrap().label, "2023");
        assert!(row(json!({"label": ["x"], "level": 1})).is_err());
    }
}
