use crate::shared::metadata::references::{PARTNERS, PRODUCTS, USERS};
use crate::shared::metadata::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata, ReferenceMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Projection,
    entity_name: "sales_reporting",
    entity_index: "p900",
    collection_name: "/sales/reporting/",
    ui: EntityUiMetadata {
        element_name: "Продажа",
        list_name: "Отчёт по продажам",
        icon: Some("orders"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("order_number", "Заказ").listed().searchable(),
    FieldMetadata::date("order_date", "Дата").listed(),
    FieldMetadata::reference("customer_id", "Клиент", PARTNERS.key)
        .listed()
        .searchable(),
    FieldMetadata::reference("product_id", "Товар", PRODUCTS.key)
        .listed()
        .searchable(),
    FieldMetadata::reference("salesperson_id", "Менеджер", USERS.key).searchable(),
    FieldMetadata::number("quantity", "Количество").listed(),
    FieldMetadata::number("amount_untaxed", "Без налога").listed(),
    FieldMetadata::number("amount_total", "Итого").listed(),
];

pub const REFERENCES: &[ReferenceMetadata] = &[PARTNERS, PRODUCTS, USERS];
