use crate::enums::PurchaseOrderStatus;
use crate::shared::metadata::references::{COMPANIES, CURRENCIES, PARTNERS};
use crate::shared::metadata::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata, ReferenceMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_name: "purchase_order",
    entity_index: "a001",
    collection_name: "/purchases/purchase-orders/",
    ui: EntityUiMetadata {
        element_name: "Заказ на закупку",
        list_name: "Заказы на закупку",
        icon: Some("purchases"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("number", "Номер")
        .required()
        .listed()
        .searchable()
        .placeholder("PO-0001"),
    FieldMetadata::reference("supplier_id", "Поставщик", PARTNERS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::date("order_date", "Дата заказа").required().listed(),
    FieldMetadata::reference("currency_id", "Валюта", CURRENCIES.key).listed(),
    FieldMetadata::reference("company_id", "Компания", COMPANIES.key).searchable(),
    FieldMetadata::enumeration("status", "Статус", PurchaseOrderStatus::VALUES).listed(),
    FieldMetadata::number("amount_untaxed", "Сумма без налога").min(0.0),
    FieldMetadata::number("amount_tax", "Налог").min(0.0),
    FieldMetadata::number("amount_total", "Итого").min(0.0).listed(),
    FieldMetadata::long_text("notes", "Примечание"),
    FieldMetadata::timestamp("created_at", "Создан"),
    FieldMetadata::timestamp("updated_at", "Изменён"),
];

pub const REFERENCES: &[ReferenceMetadata] = &[PARTNERS, CURRENCIES, COMPANIES];
