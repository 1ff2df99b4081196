//! Reference resolver: foreign key -> human label.

use contracts::domain::common::RecordId;
use contracts::shared::metadata::ReferenceMetadata;
use serde_json::Value;
use std::collections::HashMap;

/// Shown when an id is empty or not present in its collection
pub const FALLBACK_LABEL: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub struct RefItem {
    pub id: RecordId,
    pub label: String,
}

/// Side-loaded reference collections keyed by [`ReferenceMetadata::key`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceData {
    collections: HashMap<&'static str, Vec<RefItem>>,
}

impl ReferenceData {
    pub fn insert(&mut self, key: &'static str, items: Vec<RefItem>) {
        self.collections.insert(key, items);
    }

    pub fn items(&self, key: &str) -> &[RefItem] {
        self.collections.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn label(&self, key: &str, id: Option<RecordId>) -> String {
        resolve(self.items(key), id)
    }

    pub fn labels(&self, key: &str, ids: &[RecordId]) -> String {
        resolve_many(self.items(key), ids)
    }
}

/// Linear scan, `"N/A"` for `None` or unknown ids
pub fn resolve(items: &[RefItem], id: Option<RecordId>) -> String {
    id.and_then(|id| items.iter().find(|item| item.id == id))
        .map(|item| item.label.clone())
        .unwrap_or_else(|| FALLBACK_LABEL.to_string())
}

pub fn resolve_many(items: &[RefItem], ids: &[RecordId]) -> String {
    ids.iter()
        .map(|id| resolve(items, Some(*id)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build items from raw collection objects; objects without an integer id are skipped.
pub fn to_ref_items(meta: &ReferenceMetadata, objects: Vec<Value>) -> Vec<RefItem> {
    objects
        .into_iter()
        .filter_map(|object| {
            let id = object.get("id")?.as_i64()?;
            Some(RefItem {
                id,
                label: pick_label(meta, &object).unwrap_or_else(|| format!("#{}", id)),
            })
        })
        .collect()
}

/// First non-empty candidate field
fn pick_label(meta: &ReferenceMetadata, object: &Value) -> Option<String> {
    meta.label_fields.iter().find_map(|field| match object.get(*field)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::metadata::references::{CURRENCIES, USERS};
    use serde_json::json;

    fn partners() -> Vec<RefItem> {
        vec![
            RefItem { id: 1, label: "ООО Ромашка".into() },
            RefItem { id: 2, label: "ИП Петров".into() },
        ]
    }

    #[test]
    fn test_resolve_match_and_fallback() {
        assert_eq!(resolve(&partners(), Some(2)), "ИП Петров");
        assert_eq!(resolve(&partners(), Some(99)), FALLBACK_LABEL);
        assert_eq!(resolve(&partners(), None), FALLBACK_LABEL);
        assert_eq!(resolve(&[], Some(1)), FALLBACK_LABEL);
    }

    #[test]
    fn test_resolve_many_joins() {
        assert_eq!(resolve_many(&partners(), &[1, 7, 2]), "ООО Ромашка, N/A, ИП Петров");
        assert_eq!(resolve_many(&partners(), &[]), "");
    }

    #[test]
    fn test_label_candidates_in_order() {
        let items = to_ref_items(
            &USERS,
            vec![
                json!({"id": 1, "full_name": "", "username": "ivanov"}),
                json!({"id": 2, "full_name": "Анна Смирнова", "username": "asmirnova"}),
                json!({"id": 3}),
                json!({"name": "no id"}),
            ],
        );
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].label, "ivanov");
        assert_eq!(items[1].label, "Анна Смирнова");
        assert_eq!(items[2].label, "#3");
    }

    #[test]
    fn test_reference_data_lookup() {
        let mut data = ReferenceData::default();
        data.insert(CURRENCIES.key, to_ref_items(&CURRENCIES, vec![json!({"id": 5, "code": "RUB"})]));
        assert_eq!(data.label("currencies", Some(5)), "RUB");
        assert_eq!(data.label("unknown", Some(5)), FALLBACK_LABEL);
        assert_eq!(data.labels("currencies", &[5, 5]), "RUB, RUB");
    }
}
