use crate::shared::metadata::references::{ENTITIES, USERS};
use crate::shared::metadata::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata, ReferenceMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_name: "user_entity_affiliation",
    entity_index: "a010",
    collection_name: "/core/user-entity-affiliations/",
    ui: EntityUiMetadata {
        element_name: "Привязка пользователя",
        list_name: "Привязки пользователей к юрлицам",
        icon: Some("users"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::reference("user_id", "Пользователь", USERS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::reference("entity_id", "Юрлицо", ENTITIES.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::flag("is_active", "Активна").listed(),
    FieldMetadata::flag("is_default", "Основная").listed(),
];

pub const REFERENCES: &[ReferenceMetadata] = &[USERS, ENTITIES];
