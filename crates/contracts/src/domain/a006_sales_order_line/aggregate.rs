use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::enums::{InvoiceStatus, SalesLineState};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use crate::shared::serde_helpers::{lenient_f64, lenient_string};
use serde::{Deserialize, Serialize};

/// Строка заказа клиента (агрегат a006)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOrderLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default)]
    pub order_id: Option<RecordId>,

    #[serde(default)]
    pub product_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    /// Заказанное количество
    #[serde(default, deserialize_with = "lenient_f64")]
    pub product_uom_qty: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub qty_delivered: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub qty_invoiced: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_unit: f64,

    /// Скидка, %
    #[serde(default, deserialize_with = "lenient_f64")]
    pub discount: f64,

    #[serde(default)]
    pub tax_ids: Vec<RecordId>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub price_subtotal: f64,

    #[serde(default)]
    pub invoice_status: InvoiceStatus,

    #[serde(default)]
    pub state: SalesLineState,
}

impl Entity for SalesOrderLine {
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
