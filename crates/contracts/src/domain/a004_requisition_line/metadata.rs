use crate::shared::metadata::references::{PRODUCTS, PURCHASE_REQUISITIONS};
use crate::shared::metadata::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata, ReferenceMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_name: "requisition_line",
    entity_index: "a004",
    collection_name: "/purchases/requisition-lines/",
    ui: EntityUiMetadata {
        element_name: "Строка заявки",
        list_name: "Строки заявок",
        icon: Some("purchases"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::reference("requisition_id", "Заявка", PURCHASE_REQUISITIONS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::reference("product_id", "Товар", PRODUCTS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::text("description", "Описание").searchable(),
    FieldMetadata::number("quantity", "Количество")
        .required()
        .min(0.0)
        .listed(),
    FieldMetadata::number("estimated_price", "Ожидаемая цена")
        .min(0.0)
        .listed(),
    FieldMetadata::date("required_date", "Требуемая дата").listed(),
];

pub const REFERENCES: &[ReferenceMetadata] = &[PURCHASE_REQUISITIONS, PRODUCTS];
