use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use crate::shared::serde_helpers::{lenient_f64, lenient_i64};
use serde::{Deserialize, Serialize};

/// Цена поставщика (агрегат a005)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierPrice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default)]
    pub supplier_id: Option<RecordId>,

    #[serde(default)]
    pub product_id: Option<RecordId>,

    #[serde(default)]
    pub currency_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub price: f64,

    /// Минимальное количество для цены
    #[serde(default, deserialize_with = "lenient_f64")]
    pub min_quantity: f64,

    /// Срок поставки, дней
    #[serde(default, deserialize_with = "lenient_i64")]
    pub lead_time_days: i64,

    #[serde(default)]
    pub valid_from: Option<String>,

    #[serde(default)]
    pub valid_to: Option<String>,
}

impl Entity for SupplierPrice {
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
