use contracts::domain::common::{Entity, RecordId};
use contracts::shared::metadata::FieldMetadata;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::display::{display_value, id_of, number_of};
use super::references::ReferenceData;

static NULL: Value = Value::Null;

/// A loaded record: raw wire values plus display strings per field
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RecordId,
    pub values: Map<String, Value>,
    pub display: BTreeMap<&'static str, String>,
}

impl Row {
    /// `None` for records the backend returned without an id
    pub fn project<E: Entity>(record: &E, refs: &ReferenceData) -> Option<Self> {
        let id = record.id()?;
        let values = match serde_json::to_value(record) {
            Ok(Value::Object(map)) => map,
            _ => return None,
        };
        Some(Self::from_values(id, values, E::field_metadata(), refs))
    }

    pub fn from_values(
        id: RecordId,
        values: Map<String, Value>,
        fields: &[FieldMetadata],
        refs: &ReferenceData,
    ) -> Self {
        let display = fields
            .iter()
            .map(|field| {
                let value = values.get(field.name).unwrap_or(&NULL);
                (field.name, display_value(field, value, refs))
            })
            .collect();
        Self {
            id,
            values,
            display,
        }
    }

    pub fn value(&self, field: &str) -> &Value {
        self.values.get(field).unwrap_or(&NULL)
    }

    pub fn display(&self, field: &str) -> &str {
        self.display.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn id_of(&self, field: &str) -> Option<RecordId> {
        id_of(self.value(field))
    }

    pub fn number(&self, field: &str) -> f64 {
        number_of(self.value(field))
    }

    /// Back to the typed record
    pub fn to_record<E: Entity>(&self) -> Result<E, serde_json::Error> {
        serde_json::from_value(Value::Object(self.values.clone()))
    }
}
