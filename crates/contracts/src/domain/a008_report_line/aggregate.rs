use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::enums::ReportLineType;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use crate::shared::serde_helpers::{lenient_i64, lenient_string};
use serde::{Deserialize, Serialize};

fn positive_sign() -> i64 {
    1
}

/// Строка финансового отчёта (агрегат a008)
///
/// `parent_id` образует дерево внутри одного отчёта.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Отчёт (ссылка на a007_financial_report)
    #[serde(default)]
    pub report_id: Option<RecordId>,

    /// Родительская строка, `None` для корня
    #[serde(default)]
    pub parent_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub sequence: i64,

    #[serde(default)]
    pub line_type: ReportLineType,

    /// +1 или -1
    #[serde(default = "positive_sign", deserialize_with = "lenient_i64")]
    pub sign: i64,
}

impl Default for ReportLine {
    fn default() -> Self {
        Self {
            id: None,
            report_id: None,
            parent_id: None,
            code: String::new(),
            name: String::new(),
            sequence: 10,
            line_type: ReportLineType::default(),
            sign: positive_sign(),
        }
    }
}

impl Entity for ReportLine {
    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn entity_metadata_info() -> &'static EntityMetadataInfo {
        &metadata::ENTITY
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        metadata::FIELDS
    }

    fn reference_metadata() -> &'static [ReferenceMetadata] {
        metadata::REFERENCES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sign_defaults_to_positive() {
        let line: ReportLine = serde_json::from_value(json!({"id": 1, "name": "Выручка"})).unwrap();
        assert_eq!(line.sign, 1);
        assert_eq!(line.parent_id, None);

        let line: ReportLine = serde_json::from_value(json!({"id": 2, "sign": "-1"})).unwrap();
        assert_eq!(line.sign, -1);
    }
}
