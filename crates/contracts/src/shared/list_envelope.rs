//! Decoding of list responses.
//!
//! The backend answers collection requests either with a bare JSON array or
//! with an envelope object (`{"results": [...]}` for paginated views,
//! `{"data": [...]}` for custom ones). Anything else is an error: an empty
//! page must come from an empty array, never from an unrecognized shape.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("неожиданный формат списка: {0}")]
    UnrecognizedShape(&'static str),
    #[error("элемент #{index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Recognized list shapes
#[derive(Debug, Clone, PartialEq)]
pub enum ListEnvelope {
    Bare(Vec<Value>),
    Results(Vec<Value>),
    Data(Vec<Value>),
}

impl ListEnvelope {
    pub fn classify(value: Value) -> Result<Self, EnvelopeError> {
        match value {
            Value::Array(items) => Ok(Self::Bare(items)),
            Value::Object(mut map) => {
                if let Some(Value::Array(items)) = map.remove("results") {
                    return Ok(Self::Results(items));
                }
                if let Some(Value::Array(items)) = map.remove("data") {
                    return Ok(Self::Data(items));
                }
                Err(EnvelopeError::UnrecognizedShape(
                    "объект без массива results/data",
                ))
            }
            Value::Null => Err(EnvelopeError::UnrecognizedShape("null")),
            Value::String(_) => Err(EnvelopeError::UnrecognizedShape("строка")),
            Value::Number(_) => Err(EnvelopeError::UnrecognizedShape("число")),
            Value::Bool(_) => Err(EnvelopeError::UnrecognizedShape("логическое значение")),
        }
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            Self::Bare(items) | Self::Results(items) | Self::Data(items) => items,
        }
    }
}

/// Decode a list response into typed records
pub fn decode_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, EnvelopeError> {
    ListEnvelope::classify(value)?
        .into_items()
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|source| EnvelopeError::Item { index, source })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: i64,
    }

    #[test]
    fn test_bare_array() {
        let items: Vec<Item> = decode_list(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(items, vec![Item { id: 1 }, Item { id: 2 }]);
    }

    #[test]
    fn test_results_envelope() {
        let value = json!({"count": 1, "next": null, "results": [{"id": 5}]});
        let items: Vec<Item> = decode_list(value).unwrap();
        assert_eq!(items, vec![Item { id: 5 }]);
    }

    #[test]
    fn test_data_envelope() {
        let items: Vec<Item> = decode_list(json!({"data": []})).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_results_preferred_over_data() {
        let env = ListEnvelope::classify(json!({"results": [1], "data": [2, 3]})).unwrap();
        assert_eq!(env, ListEnvelope::Results(vec![json!(1)]));
    }

    #[test]
    fn test_unrecognized_shapes_fail() {
        for value in [json!({"items": []}), json!(null), json!("x"), json!(3), json!({"results": {}})] {
            let err = decode_list::<Item>(value).unwrap_err();
            assert!(matches!(err, EnvelopeError::UnrecognizedShape(_)));
        }
    }

    #[test]
    fn test_bad_item_reports_index() {
        let err = decode_list::<Item>(json!([{"id": 1}, {"id": "x"}])).unwrap_err();
        match err {
            EnvelopeError::Item { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }
}
