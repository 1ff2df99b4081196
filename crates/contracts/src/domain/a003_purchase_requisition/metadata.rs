use crate::enums::RequisitionStatus;
use crate::shared::metadata::references::{COMPANIES, DEPARTMENTS, USERS};
use crate::shared::metadata::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata, ReferenceMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_name: "purchase_requisition",
    entity_index: "a003",
    collection_name: "/purchases/purchase-requisitions/",
    ui: EntityUiMetadata {
        element_name: "Заявка на закупку",
        list_name: "Заявки на закупку",
        icon: Some("purchases"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("number", "Номер")
        .required()
        .listed()
        .searchable(),
    FieldMetadata::reference("requester_id", "Инициатор", USERS.key)
        .required()
        .listed()
        .searchable(),
    FieldMetadata::reference("department_id", "Подразделение", DEPARTMENTS.key)
        .listed()
        .searchable(),
    FieldMetadata::reference("company_id", "Компания", COMPANIES.key),
    FieldMetadata::date("start_date", "Дата начала").required().listed(),
    FieldMetadata::enumeration("status", "Статус", RequisitionStatus::VALUES).listed(),
    FieldMetadata::long_text("description", "Описание").searchable(),
    FieldMetadata::timestamp("created_at", "Создана"),
];

pub const REFERENCES: &[ReferenceMetadata] = &[USERS, DEPARTMENTS, COMPANIES];
