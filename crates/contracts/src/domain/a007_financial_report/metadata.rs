use crate::enums::ReportType;
use crate::shared::metadata::{EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_name: "financial_report",
    entity_index: "a007",
    collection_name: "/finance/financial-reports/",
    ui: EntityUiMetadata {
        element_name: "Финансовый отчёт",
        list_name: "Финансовые отчёты",
        icon: Some("invoices"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::text("code", "Код")
        .required()
        .max_length(32)
        .listed()
        .searchable(),
    FieldMetadata::text("name", "Наименование")
        .required()
        .listed()
        .searchable(),
    FieldMetadata::enumeration("report_type", "Тип", ReportType::VALUES).listed(),
    FieldMetadata::integer("sequence", "Порядок").listed(),
    FieldMetadata::flag("active", "Активен").listed(),
];
