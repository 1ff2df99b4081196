use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::enums::RequisitionStatus;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use crate::shared::serde_helpers::lenient_string;
use serde::{Deserialize, Serialize};

/// Заявка на закупку (агрегат a003)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRequisition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub number: String,

    /// Инициатор (пользователь)
    #[serde(default)]
    pub requester_id: Option<RecordId>,

    #[serde(default)]
    pub department_id: Option<RecordId>,

    #[serde(default)]
    pub company_id: Option<RecordId>,

    /// Дата начала (YYYY-MM-DD)
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_date: String,

    #[serde(default)]
    pub status: RequisitionStatus,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Entity for PurchaseRequisition {
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
