//! Form model: one JSON object mirroring the record being edited.
//!
//! Each input writes exactly one field, coerced by the field type. The object
//! is turned back into the typed record only on submit.

use contracts::domain::common::{Entity, RecordId};
use contracts::shared::metadata::{FieldMetadata, FieldType};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use super::display::number_of;
use super::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    pub mode: FormMode,
    pub values: Map<String, Value>,
    /// Numeric inputs as typed; the coerced value lives in `values`
    drafts: BTreeMap<&'static str, String>,
}

impl FormModel {
    pub fn for_create<E: Entity>(record: &E) -> Self {
        let values = match serde_json::to_value(record) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self {
            mode: FormMode::Create,
            values,
            drafts: BTreeMap::new(),
        }
    }

    pub fn for_edit(row: &Row) -> Self {
        Self {
            mode: FormMode::Edit(row.id),
            values: row.values.clone(),
            drafts: BTreeMap::new(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Write a raw input string into its field
    pub fn set_input(&mut self, field: &FieldMetadata, raw: &str) {
        if matches!(field.field_type, FieldType::Number | FieldType::Integer) {
            self.drafts.insert(field.name, raw.to_string());
        }
        self.values
            .insert(field.name.to_string(), coerce(field.field_type, raw));
    }

    pub fn set_bool(&mut self, field: &FieldMetadata, checked: bool) {
        self.values.insert(field.name.to_string(), Value::Bool(checked));
    }

    pub fn set_ids(&mut self, field: &FieldMetadata, ids: Vec<RecordId>) {
        self.values.insert(
            field.name.to_string(),
            Value::Array(ids.into_iter().map(Value::from).collect()),
        );
    }

    /// Value as shown in the input element
    pub fn input_text(&self, name: &str) -> String {
        if let Some(draft) = self.drafts.get(name) {
            return draft.clone();
        }
        match self.values.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => number_text(n),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    pub fn ids(&self, name: &str) -> Vec<RecordId> {
        self.values
            .get(name)
            .map(super::display::ids_of)
            .unwrap_or_default()
    }

    /// Labels of visible required fields that have no value
    pub fn missing_required(&self, fields: &[FieldMetadata]) -> Vec<&'static str> {
        fields
            .iter()
            .filter(|f| f.is_required() && f.visible_in_form())
            .filter(|f| is_blank(self.values.get(f.name)))
            .map(|f| f.label())
            .collect()
    }

    /// Presence first, then length and numeric bounds
    pub fn validate(&self, fields: &[FieldMetadata]) -> Result<(), String> {
        let missing = self.missing_required(fields);
        if !missing.is_empty() {
            return Err(format!("Заполните обязательные поля: {}", missing.join(", ")));
        }
        for field in fields.iter().filter(|f| f.visible_in_form()) {
            let value = self.values.get(field.name).unwrap_or(&Value::Null);
            match field.field_type {
                FieldType::Text | FieldType::LongText => {
                    if let Value::String(s) = value {
                        field.validation.validate_string(s, field.label())?;
                    }
                }
                t if t.is_numeric() => {
                    field.validation.validate_number(number_of(value), field.label())?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Decode into the typed record; the mode decides the id
    pub fn into_record<E: Entity>(mut self) -> Result<E, String> {
        match self.mode {
            FormMode::Create => {
                self.values.remove("id");
            }
            FormMode::Edit(id) => {
                self.values.insert("id".to_string(), Value::from(id));
            }
        }
        serde_json::from_value(Value::Object(self.values))
            .map_err(|e| format!("Некорректные данные формы: {}", e))
    }
}

/// `1.0 -> "1"`, `2.5 -> "2.5"`
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) => false,
    }
}

/// Input string -> wire value for a field type
pub fn coerce(field_type: FieldType, raw: &str) -> Value {
    match field_type {
        FieldType::Text | FieldType::LongText => Value::String(raw.to_string()),
        FieldType::Number => Number::from_f64(parse_amount(raw))
            .map(Value::Number)
            .unwrap_or_else(|| Value::from(0)),
        FieldType::Integer => Value::from(parse_amount(raw).trunc() as i64),
        FieldType::Sign => Value::from(if parse_amount(raw) < 0.0 { -1 } else { 1 }),
        FieldType::Date | FieldType::DateTime => {
            let raw = raw.trim();
            if raw.is_empty() {
                Value::Null
            } else {
                Value::String(raw.to_string())
            }
        }
        FieldType::Bool => Value::Bool(matches!(raw, "true" | "on" | "1")),
        FieldType::Enum => Value::String(raw.to_string()),
        FieldType::AggregateRef => raw
            .trim()
            .parse::<RecordId>()
            .map(Value::from)
            .unwrap_or(Value::Null),
        FieldType::AggregateRefList => Value::Array(
            raw.split(',')
                .filter_map(|s| s.trim().parse::<RecordId>().ok())
                .map(Value::from)
                .collect(),
        ),
    }
}

/// Leading-number parse, 0 when nothing parses.
///
/// `"12.5kg" -> 12.5`, `" -3" -> -3`, `"1e3" -> 1000`, `"abc" -> 0`, `"" -> 0`.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    let value = s[..end].parse::<f64>().unwrap_or(0.0);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_purchase_order::PurchaseOrder;
    use contracts::domain::a006_sales_order_line::SalesOrderLine;
    use contracts::enums::PurchaseOrderStatus;
    use serde_json::json;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), 12.5);
        assert_eq!(parse_amount("  -3"), -3.0);
        assert_eq!(parse_amount("12.5kg"), 12.5);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("5."), 5.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("2e"), 2.0);
        assert_eq!(parse_amount("1,5"), 1.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-"), 0.0);
        assert_eq!(parse_amount("."), 0.0);
    }

    #[test]
    fn test_coerce_by_type() {
        assert_eq!(coerce(FieldType::Number, "abc"), json!(0.0));
        assert_eq!(coerce(FieldType::Number, "7.25"), json!(7.25));
        assert_eq!(coerce(FieldType::Integer, "14.9"), json!(14));
        assert_eq!(coerce(FieldType::AggregateRef, ""), Value::Null);
        assert_eq!(coerce(FieldType::AggregateRef, "42"), json!(42));
        assert_eq!(coerce(FieldType::AggregateRefList, "1, 3,x"), json!([1, 3]));
        assert_eq!(coerce(FieldType::Date, ""), Value::Null);
        assert_eq!(coerce(FieldType::Date, "2024-05-01"), json!("2024-05-01"));
        assert_eq!(coerce(FieldType::Sign, "-1"), json!(-1));
        assert_eq!(coerce(FieldType::Sign, "1"), json!(1));
        assert_eq!(coerce(FieldType::Bool, "on"), json!(true));
    }

    #[test]
    fn test_each_input_updates_one_field() {
        let mut form = FormModel::for_create(&PurchaseOrder::default());
        let before = form.values.clone();
        let field = PurchaseOrder::field("amount_tax").unwrap();
        form.set_input(field, "19.99");

        for (key, value) in &form.values {
            if key == "amount_tax" {
                assert_eq!(value, &json!(19.99));
            } else {
                assert_eq!(Some(value), before.get(key), "{key} changed");
            }
        }
    }

    #[test]
    fn test_amount_input_keeps_typed_text() {
        let mut form = FormModel::for_create(&PurchaseOrder::default());
        let field = PurchaseOrder::field("amount_tax").unwrap();

        form.set_input(field, "1");
        assert_eq!(form.input_text("amount_tax"), "1");
        let typed = format!("{}5", form.input_text("amount_tax"));
        form.set_input(field, &typed);
        assert_eq!(form.input_text("amount_tax"), "15");
        assert_eq!(form.value("amount_tax"), Some(&json!(15.0)));

        form.set_input(field, "2.");
        assert_eq!(form.input_text("amount_tax"), "2.");
        assert_eq!(form.value("amount_tax"), Some(&json!(2.0)));
    }

    #[test]
    fn test_integral_amount_shown_without_fraction() {
        let form = FormModel::for_create(&PurchaseOrder {
            amount_total: 120.0,
            amount_tax: 20.5,
            ..Default::default()
        });
        assert_eq!(form.input_text("amount_total"), "120");
        assert_eq!(form.input_text("amount_tax"), "20.5");
    }

    #[test]
    fn test_missing_required_names_labels() {
        let form = FormModel::for_create(&PurchaseOrder::default());
        let missing = form.missing_required(PurchaseOrder::field_metadata());
        assert_eq!(missing, vec!["Номер", "Поставщик", "Дата заказа"]);
        let err = form.validate(PurchaseOrder::field_metadata()).unwrap_err();
        assert!(err.contains("Номер"));
    }

    #[test]
    fn test_bounds_are_checked() {
        let mut form = FormModel::for_create(&SalesOrderLine {
            order_id: Some(1),
            product_id: Some(2),
            ..Default::default()
        });
        let discount = SalesOrderLine::field("discount").unwrap();
        form.set_input(discount, "150");
        assert!(form.validate(SalesOrderLine::field_metadata()).is_err());
        form.set_input(discount, "15");
        assert!(form.validate(SalesOrderLine::field_metadata()).is_ok());
    }

    #[test]
    fn test_into_record_for_create_and_edit() {
        let mut form = FormModel::for_create(&PurchaseOrder::default());
        for (name, raw) in [
            ("number", "PO-7"),
            ("supplier_id", "3"),
            ("order_date", "2024-06-01"),
            ("status", "sent"),
            ("amount_total", "10"),
        ] {
            form.set_input(PurchaseOrder::field(name).unwrap(), raw);
        }
        let po: PurchaseOrder = form.clone().into_record().unwrap();
        assert_eq!(po.id, None);
        assert_eq!(po.supplier_id, Some(3));
        assert_eq!(po.status, PurchaseOrderStatus::Sent);
        assert_eq!(po.amount_total, 10.0);

        form.mode = FormMode::Edit(9);
        let po: PurchaseOrder = form.into_record().unwrap();
        assert_eq!(po.id, Some(9));
    }

    #[test]
    fn test_shape_error_is_reported() {
        let mut form = FormModel::for_create(&PurchaseOrder::default());
        form.values.insert("status".into(), json!("bogus"));
        let err = form.into_record::<PurchaseOrder>().unwrap_err();
        assert!(err.starts_with("Некорректные данные формы"));
    }
}
