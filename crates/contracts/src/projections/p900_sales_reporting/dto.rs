use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use crate::shared::serde_helpers::{lenient_f64, lenient_string};
use serde::{Deserialize, Serialize};

/// Строка отчёта по продажам (проекция p900, только чтение)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesReportRow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub order_number: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub order_date: String,

    #[serde(default)]
    pub customer_id: Option<RecordId>,

    #[serde(default)]
    pub product_id: Option<RecordId>,

    #[serde(default)]
    pub salesperson_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub quantity: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount_untaxed: f64,

    #[serde(default, deserialize_with = "lenient_f64")]
    pub amount_total: f64,
}

impl Entity for SalesReportRow {
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
