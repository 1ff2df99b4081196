//! Lenient decoders for values the backend may send in more than one form.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decimal columns arrive either as JSON numbers or as strings (`"12.50"`).
/// `null`, empty strings and unparsable strings decode to 0.
pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Same as [`lenient_f64`] for integer columns; fractional input is truncated.
pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse::<f64>().map(|f| f as i64).unwrap_or(0),
        _ => 0,
    })
}

/// Text and date columns the backend leaves `null`: empty string.
/// Numbers and booleans keep their JSON text.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Amounts {
        #[serde(default, deserialize_with = "lenient_f64")]
        price: f64,
        #[serde(default, deserialize_with = "lenient_i64")]
        days: i64,
    }

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "lenient_string")]
        number: String,
    }

    #[test]
    fn test_numbers_and_strings() {
        let a: Amounts = serde_json::from_value(json!({"price": "12.50", "days": 3})).unwrap();
        assert_eq!(a.price, 12.5);
        assert_eq!(a.days, 3);

        let a: Amounts = serde_json::from_value(json!({"price": 7, "days": "4.9"})).unwrap();
        assert_eq!(a.price, 7.0);
        assert_eq!(a.days, 4);
    }

    #[test]
    fn test_missing_null_and_garbage_are_zero() {
        let a: Amounts = serde_json::from_value(json!({})).unwrap();
        assert_eq!((a.price, a.days), (0.0, 0));

        let a: Amounts = serde_json::from_value(json!({"price": null, "days": "n/a"})).unwrap();
        assert_eq!((a.price, a.days), (0.0, 0));
    }

    #[test]
    fn test_null_text_is_empty() {
        let d: Doc = serde_json::from_value(json!({"number": null})).unwrap();
        assert_eq!(d.number, "");
        let d: Doc = serde_json::from_value(json!({})).unwrap();
        assert_eq!(d.number, "");
        let d: Doc = serde_json::from_value(json!({"number": 42})).unwrap();
        assert_eq!(d.number, "42");
        let d: Doc = serde_json::from_value(json!({"number": "PO-1"})).unwrap();
        assert_eq!(d.number, "PO-1");
    }
}
