use crate::shared::metadata::references::{PRODUCTS, PURCHASE_ORDERS, TAXES};
use crate::shared::metadata::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata, FieldSection,
    ReferenceMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_name: "purchase_order_line",
    entity_index: "a002",
    collection_name: "/purchases/purchase-order-lines/",
    ui: EntityUiMetadata {
        element_name: "Строка заказа на закупку",
        list_name: "Строки заказов на закупку",
        icon: Some("purchases"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::reference("order_id", "Заказ", PURCHASE_ORDERS.key)
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
    FieldMetadata::number("unit_price", "Цена").min(0.0).listed(),
    FieldMetadata::reference_list("tax_ids", "Налоги", TAXES.key).section(FieldSection::Amounts),
    FieldMetadata::number("subtotal", "Сумма").listed(),
];

pub const REFERENCES: &[ReferenceMetadata] = &[PURCHASE_ORDERS, PRODUCTS, TAXES];
