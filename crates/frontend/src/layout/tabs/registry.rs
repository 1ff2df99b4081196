//! Tab key → page. Every key the application opens is resolved here.

use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::domain::a001_purchase_order::ui::PurchaseOrderList;
use crate::domain::a002_purchase_order_line::ui::PurchaseOrderLineList;
use crate::domain::a003_purchase_requisition::ui::PurchaseRequisitionList;
use crate::domain::a004_requisition_line::ui::RequisitionLineList;
use crate::domain::a005_supplier_price::ui::SupplierPriceList;
use crate::domain::a006_sales_order_line::ui::SalesOrderLineList;
use crate::domain::a007_financial_report::ui::FinancialReportList;
use crate::domain::a008_report_line::resource::parse_report_lines_tab_key;
use crate::domain::a008_report_line::ui::{ReportLineList, ReportLinesOfReport};
use crate::domain::a009_partner_bank_account::ui::PartnerBankAccountList;
use crate::domain::a010_user_entity_affiliation::ui::AffiliationList;
use crate::projections::p900_sales_reporting::ui::SalesReportingList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabRoute {
    PurchaseOrders,
    PurchaseOrderLines,
    PurchaseRequisitions,
    RequisitionLines,
    SupplierPrices,
    SalesOrderLines,
    SalesReporting,
    FinancialReports,
    ReportLines,
    /// `a008_report_line_<report id>`
    LinesOfReport(RecordId),
    BankAccounts,
    Affiliations,
}

impl TabRoute {
    pub fn from_key(key: &str) -> Option<Self> {
        let route = match key {
            "a001_purchase_order" => Self::PurchaseOrders,
            "a002_purchase_order_line" => Self::PurchaseOrderLines,
            "a003_purchase_requisition" => Self::PurchaseRequisitions,
            "a004_requisition_line" => Self::RequisitionLines,
            "a005_supplier_price" => Self::SupplierPrices,
            "a006_sales_order_line" => Self::SalesOrderLines,
            "a007_financial_report" => Self::FinancialReports,
            "a008_report_line" => Self::ReportLines,
            "a009_partner_bank_account" => Self::BankAccounts,
            "a010_user_entity_affiliation" => Self::Affiliations,
            "p900_sales_reporting" => Self::SalesReporting,
            other => Self::LinesOfReport(parse_report_lines_tab_key(other)?),
        };
        Some(route)
    }
}

/// Page for a tab key, or a placeholder for keys nothing handles
pub fn render_tab_content(key: &str) -> AnyView {
    let Some(route) = TabRoute::from_key(key) else {
        log::warn!("неизвестный ключ вкладки: {}", key);
        return view! { <div class="placeholder">"Раздел не найден"</div> }.into_any();
    };

    match route {
        TabRoute::PurchaseOrders => view! { <PurchaseOrderList /> }.into_any(),
        TabRoute::PurchaseOrderLines => view! { <PurchaseOrderLineList /> }.into_any(),
        TabRoute::PurchaseRequisitions => view! { <PurchaseRequisitionList /> }.into_any(),
        TabRoute::RequisitionLines => view! { <RequisitionLineList /> }.into_any(),
        TabRoute::SupplierPrices => view! { <SupplierPriceList /> }.into_any(),
        TabRoute::SalesOrderLines => view! { <SalesOrderLineList /> }.into_any(),
        TabRoute::SalesReporting => view! { <SalesReportingList /> }.into_any(),
        TabRoute::FinancialReports => view! { <FinancialReportList /> }.into_any(),
        TabRoute::ReportLines => view! { <ReportLineList /> }.into_any(),
        TabRoute::LinesOfReport(report_id) => {
            view! { <ReportLinesOfReport report_id=report_id /> }.into_any()
        }
        TabRoute::BankAccounts => view! { <PartnerBankAccountList /> }.into_any(),
        TabRoute::Affiliations => view! { <AffiliationList /> }.into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_keys() {
        assert_eq!(TabRoute::from_key("a001_purchase_order"), Some(TabRoute::PurchaseOrders));
        assert_eq!(TabRoute::from_key("a008_report_line"), Some(TabRoute::ReportLines));
        assert_eq!(
            TabRoute::from_key("a008_report_line_42"),
            Some(TabRoute::LinesOfReport(42))
        );
        assert_eq!(TabRoute::from_key("a008_report_line_x"), None);
        assert_eq!(TabRoute::from_key("d400_monthly_summary"), None);
    }
}
