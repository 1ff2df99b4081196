use crate::enums::{InvoiceStatus, SalesLineState};
use crate::shared::metadata::references::{PRODUCTS, SALES_ORDERS, TAXES};
use crate::shared::metadata::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata, FieldSection,
    ReferenceMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_name: "sales_order_line",
    entity_index: "a006",
    collection_name: "/sales/sales-order-lines/",
    ui: EntityUiMetadata {
        element_name: "Строка заказа клиента",
        list_name: "Строки заказов клиентов",
        icon: Some("orders"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::reference("order_id", "Заказ", SALES_ORDERS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::reference("product_id", "Товар", PRODUCTS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::text("description", "Описание").searchable(),
    FieldMetadata::number("product_uom_qty", "Заказано")
        .required()
        .min(0.0)
        .listed(),
    FieldMetadata::number("qty_delivered", "Доставлено").min(0.0).listed(),
    FieldMetadata::number("qty_invoiced", "Выставлено").min(0.0),
    FieldMetadata::number("price_unit", "Цена").min(0.0).listed(),
    FieldMetadata::number("discount", "Скидка, %").min(0.0).max(100.0),
    FieldMetadata::reference_list("tax_ids", "Налоги", TAXES.key).section(FieldSection::Amounts),
    FieldMetadata::number("price_subtotal", "Сумма").listed(),
    FieldMetadata::enumeration("invoice_status", "Счёт", InvoiceStatus::VALUES).listed(),
    FieldMetadata::enumeration("state", "Состояние", SalesLineState::VALUES),
];

pub const REFERENCES: &[ReferenceMetadata] = &[SALES_ORDERS, PRODUCTS, TAXES];
