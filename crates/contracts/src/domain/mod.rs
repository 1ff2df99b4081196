pub mod a001_purchase_order;
pub mod a002_purchase_order_line;
pub mod a003_purchase_requisition;
pub mod a004_requisition_line;
pub mod a005_supplier_price;
pub mod a006_sales_order_line;
pub mod a007_financial_report;
pub mod a008_report_line;
pub mod a009_partner_bank_account;
pub mod a010_user_entity_affiliation;
pub mod common;
