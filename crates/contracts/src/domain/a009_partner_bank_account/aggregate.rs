use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use crate::shared::serde_helpers::lenient_string;
use serde::{Deserialize, Serialize};

/// Банковский счёт партнёра (агрегат a009)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartnerBankAccount {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default)]
    pub partner_id: Option<RecordId>,

    #[serde(default)]
    pub bank_id: Option<RecordId>,

    #[serde(default, deserialize_with = "lenient_string")]
    pub account_number: String,

    /// Юрлицо группы, к которому относится счёт
    #[serde(default)]
    pub entity_id: Option<RecordId>,
}

impl Entity for PartnerBankAccount {
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
