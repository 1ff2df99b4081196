use crate::shared::metadata::references::{CURRENCIES, PARTNERS, PRODUCTS};
use crate::shared::metadata::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata, ReferenceMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_name: "supplier_price",
    entity_index: "a005",
    collection_name: "/purchases/supplier-prices/",
    ui: EntityUiMetadata {
        element_name: "Цена поставщика",
        list_name: "Цены поставщиков",
        icon: Some("suppliers"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::reference("supplier_id", "Поставщик", PARTNERS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::reference("product_id", "Товар", PRODUCTS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::number("price", "Цена").required().min(0.0).listed(),
    FieldMetadata::reference("currency_id", "Валюта", CURRENCIES.key).listed(),
    FieldMetadata::number("min_quantity", "Мин. количество").min(0.0),
    FieldMetadata::integer("lead_time_days", "Срок поставки, дн.")
        .min(0.0)
        .listed(),
    FieldMetadata::date("valid_from", "Действует с"),
    FieldMetadata::date("valid_to", "Действует по"),
];

pub const REFERENCES: &[ReferenceMetadata] = &[PARTNERS, PRODUCTS, CURRENCIES];
