use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use crate::shared::serde_helpers::{lenient_f64, lenient_string};
use serde::{Deserialize, Serialize};

/// Строка заявки на закупку (агрегат a004)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequisitionLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Заявка (ссылка на a003_purchase_requisition)
    #[serde(default)]
    pub requisition_id: Option<RecordId>,

    #[serde(default)]
    pub product_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub estimated_price: f64,

    /// Требуемая дата поставки (YYYY-MM-DD)
    #[serde(default)]
    pub required_date: Option<String>,
}

impl Entity for RequisitionLine {
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
