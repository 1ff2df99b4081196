use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::enums::PurchaseOrderStatus;
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use crate::shared::serde_helpers::{lenient_f64, lenient_string};
use serde::{Deserialize, Serialize};

/// Заказ на закупку (агрегат a001)
///
/// Суммы считает backend; клиент их только показывает и пересылает обратно.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    /// Номер документа (напр. "PO-2024-0012")
    #[serde(default, deserialize_with = "lenient_string")]
    pub number: String,

    /// Поставщик (партнёр)
    #[serde(default)]
    pub supplier_id: Option<RecordId>,

    /// Дата заказа (YYYY-MM-DD)
    #[serde(default, deserialize_with = "lenient_string")]
    pub order_date: String,

    #[serde(default)]
    pub currency_id: Option<RecordId>,

    #[serde(default)]
    pub company_id: Option<RecordId>,

    #[serde(default)]
    pub status: PurchaseOrderStatus,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount_untaxed: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount_tax: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount_total: f64,

    #[serde(default)]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Entity for PurchaseOrder {
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
