use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::enums::ReportType;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata};
use crate::shared::serde_helpers::{lenient_i64, lenient_string};
use serde::{Deserialize, Serialize};

/// Финансовый отчёт (агрегат a007), строки в a008_report_line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(default)]
    pub report_type: ReportType,

    #[serde(default, deserialize_with = "lenient_i64")]
    pub sequence: i64,

    #[serde(default)]
    pub active: bool,
}

impl Default for FinancialReport {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            name: String::new(),
            report_type: ReportType::default(),
            sequence: 10,
            active: true,
        }
    }
}

impl Entity for FinancialReport {
    fn id(&self) -> Option<RecordId> {
        self.id
    }

    fn entity_metadata_info() -> &'static EntityMetadataInfo {
        &metadata::ENTITY
    }

    fn field_metadata() -> &'static [FieldMetadata] {
        metadata::FIELDS
    }
}
