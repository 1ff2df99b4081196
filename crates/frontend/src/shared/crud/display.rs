//! Display strings for field values.

use contracts::domain::common::RecordId;
use contracts::shared::metadata::{FieldMetadata, FieldType};
use serde_json::Value;

use super::references::ReferenceData;
use crate::shared::components::table::{format_money, format_number_with_decimals};
use crate::shared::date_utils::{format_date, format_datetime};

/// Number from a JSON value that may also be a numeric string
pub fn number_of(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

pub fn id_of(value: &Value) -> Option<RecordId> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn ids_of(value: &Value) -> Vec<RecordId> {
    match value {
        Value::Array(items) => items.iter().filter_map(id_of).collect(),
        _ => Vec::new(),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Human-readable value of one field
pub fn display_value(field: &FieldMetadata, value: &Value, refs: &ReferenceData) -> String {
    match field.field_type {
        FieldType::Text | FieldType::LongText => text_of(value),
        FieldType::Number => format_money(number_of(value)),
        FieldType::Integer => format_number_with_decimals(number_of(value).trunc(), 0),
        FieldType::Date => match value {
            Value::String(s) if !s.is_empty() => format_date(s),
            _ => String::new(),
        },
        FieldType::DateTime => match value {
            Value::String(s) if !s.is_empty() => format_datetime(s),
            _ => String::new(),
        },
        FieldType::Bool => {
            if value.as_bool().unwrap_or(false) {
                "Да".to_string()
            } else {
                "Нет".to_string()
            }
        }
        FieldType::Enum => {
            let code = text_of(value);
            field
                .enum_label(&code)
                .map(str::to_string)
                .unwrap_or(code)
        }
        FieldType::Sign => {
            if number_of(value) < 0.0 {
                "−".to_string()
            } else {
                "+".to_string()
            }
        }
        FieldType::AggregateRef => {
            refs.label(field.ref_collection.unwrap_or_default(), id_of(value))
        }
        FieldType::AggregateRefList => {
            refs.labels(field.ref_collection.unwrap_or_default(), &ids_of(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::references::RefItem;
    use contracts::enums::PurchaseOrderStatus;
    use serde_json::json;

    fn refs() -> ReferenceData {
        let mut data = ReferenceData::default();
        data.insert(
            "taxes",
            vec![
                RefItem { id: 1, label: "НДС 20%".into() },
                RefItem { id: 2, label: "НДС 10%".into() },
            ],
        );
        data
    }

    #[test]
    fn test_scalar_fields() {
        let r = ReferenceData::default();
        assert_eq!(display_value(&FieldMetadata::number("a", "A"), &json!("1234.5"), &r), "1 234.50");
        assert_eq!(display_value(&FieldMetadata::integer("a", "A"), &json!(7), &r), "7");
        assert_eq!(display_value(&FieldMetadata::date("a", "A"), &json!("2024-03-15"), &r), "15.03.2024");
        assert_eq!(display_value(&FieldMetadata::date("a", "A"), &Value::Null, &r), "");
        assert_eq!(display_value(&FieldMetadata::flag("a", "A"), &json!(true), &r), "Да");
        assert_eq!(display_value(&FieldMetadata::sign("a", "A"), &json!(-1), &r), "−");
        assert_eq!(display_value(&FieldMetadata::text("a", "A"), &Value::Null, &r), "");
    }

    #[test]
    fn test_enum_label() {
        let field = FieldMetadata::enumeration("status", "Статус", PurchaseOrderStatus::VALUES);
        let r = ReferenceData::default();
        assert_eq!(display_value(&field, &json!("purchase"), &r), PurchaseOrderStatus::Purchase.display_name());
        assert_eq!(display_value(&field, &json!("legacy"), &r), "legacy");
    }

    #[test]
    fn test_references() {
        let single = FieldMetadata::reference("tax_id", "Налог", "taxes");
        let multi = FieldMetadata::reference_list("tax_ids", "Налоги", "taxes");
        assert_eq!(display_value(&single, &json!(2), &refs()), "НДС 10%");
        assert_eq!(display_value(&single, &Value::Null, &refs()), "N/A");
        assert_eq!(display_value(&multi, &json!([1, 2]), &refs()), "НДС 20%, НДС 10%");
    }
}
