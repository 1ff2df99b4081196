use crate::shared::metadata::references::{BANKS, ENTITIES, PARTNERS};
use crate::shared::metadata::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata, ReferenceMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_name: "partner_bank_account",
    entity_index: "a009",
    collection_name: "/partners/bank-accounts/",
    ui: EntityUiMetadata {
        element_name: "Банковский счёт партнёра",
        list_name: "Банковские счета партнёров",
        icon: Some("payments"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::reference("partner_id", "Партнёр", PARTNERS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::reference("bank_id", "Банк", BANKS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::text("account_number", "Номер счёта")
        .required()
        .max_length(34)
        .listed()
        .searchable(),
    FieldMetadata::reference("entity_id", "Юрлицо", ENTITIES.key)
        .listed()
        .searchable(),
];

pub const REFERENCES: &[ReferenceMetadata] = &[PARTNERS, BANKS, ENTITIES];
