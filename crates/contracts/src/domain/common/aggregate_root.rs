use crate::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};
use serde::{de::DeserializeOwned, Serialize};

/// Primary key assigned by the backend
pub type RecordId = i64;

/// Трейт для записи, которой владеет backend
///
/// Клиент держит только временную копию: запись создаётся POST, меняется PUT,
/// удаляется DELETE и после каждой мутации перечитывается целиком.
pub trait Entity: Clone + Default + Serialize + DeserializeOwned + 'static {
    /// ID записи, `None` до создания
    fn id(&self) -> Option<RecordId>;

    /// Метаданные сущности (endpoint, названия)
    fn entity_metadata_info() -> &'static EntityMetadataInfo;

    /// Метаданные полей в порядке отображения
    fn field_metadata() -> &'static [FieldMetadata];

    /// Справочники, нужные для подписей внешних ключей
    fn reference_metadata() -> &'static [ReferenceMetadata] {
        &[]
    }

    /// Метаданные поля по имени
    fn field(name: &str) -> Option<&'static FieldMetadata> {
        Self::field_metadata().iter().find(|f| f.name == name)
    }
}
