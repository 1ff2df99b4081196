use super::metadata;
use crate::domain::common::{Entity, RecordId};
use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use serde::{Deserialize, Serialize};

/// Привязка пользователя к юрлицу (агрегат a010)
///
/// У пользователя должна быть не более чем одна основная привязка. Клиент
/// поддерживает это последовательностью PATCH-запросов, гарантирует это backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntityAffiliation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,

    #[serde(default)]
    pub user_id: Option<RecordId>,

    #[serde(default)]
    pub entity_id: Option<RecordId>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub is_default: bool,
}

impl Default for UserEntityAffiliation {
    fn default() -> Self {
        Self {
            id: None,
            user_id: None,
            entity_id: None,
            is_active: true,
            is_default: false,
        }
    }
}

impl Entity for UserEntityAffiliation {
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
