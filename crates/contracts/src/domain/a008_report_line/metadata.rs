use crate::enums::ReportLineType;
use crate::shared::metadata::references::{FINANCIAL_REPORTS, REPORT_LINES};
use crate::shared::metadata::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, FieldMetadata, ReferenceMetadata,
};

pub const ENTITY: EntityMetadataInfo = EntityMetadataInfo {
    entity_type: EntityType::Aggregate,
    entity_name: "report_line",
    entity_index: "a008",
    collection_name: "/finance/report-lines/",
    ui: EntityUiMetadata {
        element_name: "Строка отчёта",
        list_name: "Строки отчёта",
        icon: Some("invoices"),
    },
};

pub const FIELDS: &[FieldMetadata] = &[
    FieldMetadata::reference("report_id", "Отчёт", FINANCIAL_REPORTS.key).required(),
    FieldMetadata::reference("parent_id", "Родитель", REPORT_LINES.key)
        .listed()
        .searchable(),
    FieldMetadata::text("code", "Код").required().listed().searchable(),
    FieldMetadata::text("name", "Наименование")
        .required()
        .listed()
        .searchable(),
    FieldMetadata::integer("sequence", "Порядок").listed(),
    FieldMetadata::enumeration("line_type", "Тип строки", ReportLineType::VALUES).listed(),
    FieldMetadata::sign("sign", "Знак").listed(),
];

pub const REFERENCES: &[ReferenceMetadata] = &[FINANCIAL_REPORTS, REPORT_LINES];
