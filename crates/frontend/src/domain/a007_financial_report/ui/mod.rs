use leptos::prelude::*;

use crate::domain::a007_financial_report::resource::FinancialReports;
use crate::domain::a008_report_line::resource::report_lines_tab_key;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::crud::ui::{ResourceListPage, RowAction, RowActionContext};

#[component]
pub fn FinancialReportList() -> impl IntoView {
    let tabs = expect_context::<AppGlobalContext>();

    let open_lines = Callback::new(move |ctx: RowActionContext| {
        let title = format!("Строки: {}", ctx.row.display("name"));
        tabs.open_tab(&report_lines_tab_key(ctx.row.id), &title);
    });
    let actions = vec![RowAction {
        label: "Строки отчёта",
        icon: "tree",
        visible: |_| true,
        run: open_lines,
    }];

    view! {
        <ResourceListPage
            resource=FinancialReports
            page_key="a007_financial_report"
            row_actions=actions
        />
    }
}
