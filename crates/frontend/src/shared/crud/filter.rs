//! Pure list derivation: search, status tab, field filters, sorting.

use contracts::domain::common::RecordId;
use contracts::shared::metadata::{EnumValue, FieldMetadata};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::row::Row;
use crate::shared::date_utils::date_part;

/// Status tabs over one enum field; "Все" is implicit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabSpec {
    pub field: &'static str,
    pub values: &'static [EnumValue],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Select over the field's reference collection
    Reference,
    /// Exact date
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSpec {
    pub field: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub const fn reference(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FilterKind::Reference,
        }
    }

    pub const fn date(field: &'static str, label: &'static str) -> Self {
        Self {
            field,
            label,
            kind: FilterKind::Date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Id(RecordId),
    /// YYYY-MM-DD
    Date(String),
}

impl FilterValue {
    fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Id(id), Value::Number(n)) => n.as_i64() == Some(*id),
            (Self::Date(date), Value::String(s)) => date_part(s) == date,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: &'static str,
    pub ascending: bool,
}

/// Everything that narrows the loaded rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query<'a> {
    pub search: &'a str,
    pub searchable: Vec<&'static str>,
    pub tab: Option<(&'static str, &'a str)>,
    pub filters: Option<&'a BTreeMap<&'static str, FilterValue>>,
}

/// Case-insensitive substring over the searchable display strings.
/// A blank term matches everything.
pub fn matches_search(row: &Row, term: &str, searchable: &[&'static str]) -> bool {
    let term = term.trim();
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    searchable
        .iter()
        .any(|field| row.display(field).to_lowercase().contains(&needle))
}

pub fn matches_tab(row: &Row, tab: Option<(&str, &str)>) -> bool {
    match tab {
        Some((field, code)) => row.value(field).as_str() == Some(code),
        None => true,
    }
}

pub fn matches_filters(row: &Row, filters: &BTreeMap<&'static str, FilterValue>) -> bool {
    filters
        .iter()
        .all(|(field, value)| value.matches(row.value(field)))
}

pub fn filter_rows(rows: &[Row], query: &Query) -> Vec<Row> {
    rows.iter()
        .filter(|row| matches_search(row, query.search, &query.searchable))
        .filter(|row| matches_tab(row, query.tab))
        .filter(|row| query.filters.map_or(true, |f| matches_filters(row, f)))
        .cloned()
        .collect()
}

/// Numeric columns compare by value, the rest by display string
pub fn sort_rows(rows: &mut [Row], sort: SortState, fields: &[FieldMetadata]) {
    let numeric = fields
        .iter()
        .find(|f| f.name == sort.field)
        .is_some_and(|f| f.field_type.is_numeric());
    rows.sort_by(|a, b| {
        let cmp = if numeric {
            a.number(sort.field)
                .partial_cmp(&b.number(sort.field))
                .unwrap_or(Ordering::Equal)
        } else {
            a.display(sort.field)
                .to_lowercase()
                .cmp(&b.display(sort.field).to_lowercase())
        };
        let cmp = cmp.then(a.id.cmp(&b.id));
        if sort.ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Names of the fields marked searchable
pub fn searchable_fields(fields: &[FieldMetadata]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|f| f.ui.searchable)
        .map(|f| f.name)
        .collect()
}

/// Sums of amount columns over the given rows
pub fn totals(rows: &[Row], fields: &[FieldMetadata]) -> BTreeMap<&'static str, f64> {
    fields
        .iter()
        .filter(|f| f.field_type == contracts::shared::metadata::FieldType::Number)
        .map(|f| (f.name, rows.iter().map(|r| r.number(f.name)).sum()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(id: RecordId, number: &str, supplier: &str, status: &str, total: f64) -> Row {
        let values = json!({
            "id": id,
            "number": number,
            "supplier_id": id * 10,
            "order_date": "2024-03-15",
            "status": status,
            "amount_total": total,
        });
        let Value::Object(values) = values else { unreachable!() };
        Row {
            id,
            values,
            display: BTreeMap::from([
                ("number", number.to_string()),
                ("supplier_id", supplier.to_string()),
                ("status", status.to_string()),
            ]),
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row(1, "PO-001", "ООО Ромашка", "draft", 100.0),
            row(2, "PO-002", "ИП Петров", "purchase", 50.0),
            row(3, "PO-003", "ромашка и ко", "draft", 75.5),
        ]
    }

    const SEARCHABLE: &[&str] = &["number", "supplier_id"];

    #[test]
    fn test_blank_search_is_identity() {
        for term in ["", "   ", "\t"] {
            let query = Query {
                search: term,
                searchable: SEARCHABLE.to_vec(),
                ..Default::default()
            };
            assert_eq!(filter_rows(&rows(), &query), rows());
        }
    }

    #[test]
    fn test_search_sound_and_complete() {
        let all = rows();
        let query = Query {
            search: "РОМАШ",
            searchable: SEARCHABLE.to_vec(),
            ..Default::default()
        };
        let found = filter_rows(&all, &query);
        assert_eq!(found.iter().map(|r| r.id).collect::<Vec<_>>(), vec![1, 3]);
        for r in &all {
            let hit = SEARCHABLE
                .iter()
                .any(|f| r.display(f).to_lowercase().contains("ромаш"));
            assert_eq!(found.contains(r), hit);
        }
    }

    #[test]
    fn test_search_ignores_non_searchable_fields() {
        let query = Query {
            search: "purchase",
            searchable: SEARCHABLE.to_vec(),
            ..Default::default()
        };
        assert!(filter_rows(&rows(), &query).is_empty());
    }

    #[test]
    fn test_tab_and_filters() {
        let filters = BTreeMap::from([("supplier_id", FilterValue::Id(30))]);
        let query = Query {
            tab: Some(("status", "draft")),
            filters: Some(&filters),
            ..Default::default()
        };
        let found = filter_rows(&rows(), &query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 3);

        let by_date = BTreeMap::from([("order_date", FilterValue::Date("2024-03-15".into()))]);
        let query = Query {
            filters: Some(&by_date),
            ..Default::default()
        };
        assert_eq!(filter_rows(&rows(), &query).len(), 3);
    }

    #[test]
    fn test_sort_numeric_and_text() {
        let fields = [
            FieldMetadata::text("number", "Номер"),
            FieldMetadata::number("amount_total", "Итого"),
        ];
        let mut r = rows();
        sort_rows(&mut r, SortState { field: "amount_total", ascending: true }, &fields);
        assert_eq!(r.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3, 1]);
        sort_rows(&mut r, SortState { field: "number", ascending: false }, &fields);
        assert_eq!(r.iter().map(|r| r.id).collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn test_totals() {
        let fields = [
            FieldMetadata::text("number", "Номер"),
            FieldMetadata::number("amount_total", "Итого"),
        ];
        let sums = totals(&rows(), &fields);
        assert_eq!(sums.len(), 1);
        assert_eq!(sums["amount_total"], 225.5);
    }
}
