//! Reference collections shared by several resources.
//!
//! The `key` is what [`FieldMetadata::ref_collection`](super::FieldMetadata) points at.

use super::ReferenceMetadata;

pub const PARTNERS: ReferenceMetadata = ReferenceMetadata {
    key: "partners",
    collection_name: "/partners/partners/",
    label_fields: &["name", "display_name"],
};

pub const BANKS: ReferenceMetadata = ReferenceMetadata {
    key: "banks",
    collection_name: "/partners/banks/",
    label_fields: &["name", "bic"],
};

pub const CURRENCIES: ReferenceMetadata = ReferenceMetadata {
    key: "currencies",
    collection_name: "/finance/currencies/",
    label_fields: &["code", "name"],
};

pub const TAXES: ReferenceMetadata = ReferenceMetadata {
    key: "taxes",
    collection_name: "/finance/taxes/",
    label_fields: &["name", "amount"],
};

pub const COMPANIES: ReferenceMetadata = ReferenceMetadata {
    key: "companies",
    collection_name: "/core/companies/",
    label_fields: &["name"],
};

pub const ENTITIES: ReferenceMetadata = ReferenceMetadata {
    key: "entities",
    collection_name: "/core/entities/",
    label_fields: &["name", "code"],
};

pub const USERS: ReferenceMetadata = ReferenceMetadata {
    key: "users",
    collection_name: "/core/users/",
    label_fields: &["full_name", "username", "email"],
};

pub const DEPARTMENTS: ReferenceMetadata = ReferenceMetadata {
    key: "departments",
    collection_name: "/core/departments/",
    label_fields: &["name"],
};

pub const PRODUCTS: ReferenceMetadata = ReferenceMetadata {
    key: "products",
    collection_name: "/inventory/products/",
    label_fields: &["name", "default_code"],
};

pub const PURCHASE_ORDERS: ReferenceMetadata = ReferenceMetadata {
    key: "purchase_orders",
    collection_name: "/purchases/purchase-orders/",
    label_fields: &["number"],
};

pub const PURCHASE_REQUISITIONS: ReferenceMetadata = ReferenceMetadata {
    key: "purchase_requisitions",
    collection_name: "/purchases/purchase-requisitions/",
    label_fields: &["number"],
};

pub const SALES_ORDERS: ReferenceMetadata = ReferenceMetadata {
    key: "sales_orders",
    collection_name: "/sales/sales-orders/",
    label_fields: &["number", "name"],
};

pub const FINANCIAL_REPORTS: ReferenceMetadata = ReferenceMetadata {
    key: "financial_reports",
    collection_name: "/finance/financial-reports/",
    label_fields: &["name", "code"],
};

pub const REPORT_LINES: ReferenceMetadata = ReferenceMetadata {
    key: "report_lines",
    collection_name: "/finance/report-lines/",
    label_fields: &["name", "code"],
};
