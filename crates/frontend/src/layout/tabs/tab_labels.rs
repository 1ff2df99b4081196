//! Tab titles. Resource pages take the list name from their metadata.

use contracts::domain::a001_purchase_order::metadata::ENTITY as A001;
use contracts::domain::a002_purchase_order_line::metadata::ENTITY as A002;
use contracts::domain::a003_purchase_requisition::metadata::ENTITY as A003;
use contracts::domain::a004_requisition_line::metadata::ENTITY as A004;
use contracts::domain::a005_supplier_price::metadata::ENTITY as A005;
use contracts::domain::a006_sales_order_line::metadata::ENTITY as A006;
use contracts::domain::a007_financial_report::metadata::ENTITY as A007;
use contracts::domain::a008_report_line::metadata::ENTITY as A008;
use contracts::domain::a009_partner_bank_account::metadata::ENTITY as A009;
use contracts::domain::a010_user_entity_affiliation::metadata::ENTITY as A010;
use contracts::projections::p900_sales_reporting::metadata::ENTITY as P900;

use crate::domain::a008_report_line::resource::parse_report_lines_tab_key;

/// Title of a fixed tab key, "" for unknown keys
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_purchase_order" => A001.ui.list_name,
        "a002_purchase_order_line" => A002.ui.list_name,
        "a003_purchase_requisition" => A003.ui.list_name,
        "a004_requisition_line" => A004.ui.list_name,
        "a005_supplier_price" => A005.ui.list_name,
        "a006_sales_order_line" => A006.ui.list_name,
        "a007_financial_report" => A007.ui.list_name,
        "a008_report_line" => A008.ui.list_name,
        "a009_partner_bank_account" => A009.ui.list_name,
        "a010_user_entity_affiliation" => A010.ui.list_name,
        "p900_sales_reporting" => P900.ui.list_name,
        _ => "",
    }
}

/// Title for any key, parameterised ones included; falls back to the key
pub fn tab_title(key: &str) -> String {
    if let Some(report_id) = parse_report_lines_tab_key(key) {
        return format!("Строки отчёта #{}", report_id);
    }
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(tab_title("a001_purchase_order"), A001.ui.list_name);
        assert_eq!(tab_title("a008_report_line_5"), "Строки отчёта #5");
        assert_eq!(tab_title("unknown_key"), "unknown_key");
    }
}
