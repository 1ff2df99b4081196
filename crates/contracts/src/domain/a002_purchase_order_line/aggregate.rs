use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use crate::shared::serde_helpers::{lenient_f64, lenient_string};
use serde::{Deserialize, Serialize};

/// Строка заказа на закупку (агрегат a002)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Заказ (ссылка на a001_purchase_order)
    #[serde(default)]
    pub order_id: Option<RecordId>,

    #[serde(default)]
    pub product_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub unit_price: f64,

    /// Применяемые налоги
    #[serde(default)]
    pub tax_ids: Vec<RecordId>,

    /// Сумма без налога, считает backend
    #[serde(default, deserialize_with = "lenient_f64")]
    pub subtotal: f64,
}

impl Entity for PurchaseOrderLine {
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
