use contracts::domain::common::RecordId;
use leptos::prelude::*;

use crate::domain::a008_report_line::resource::{report_lines_tab_key, ReportLines};
use crate::domain::a008_report_line::tree::render_tree;
use crate::shared::crud::ui::{AlternateView, ResourceListPage};

const TREE_VIEW: AlternateView = AlternateView {
    label: " Дерево",
    icon: "tree",
    render: render_tree,
};

/// All report lines, unscoped
#[component]
pub fn ReportLineList() -> impl IntoView {
    view! {
        <ResourceListPage
            resource=ReportLines::default()
            page_key="a008_report_line"
            alternate_view=TREE_VIEW
        />
    }
}

/// Lines of one report, opened from the financial reports list
#[component]
pub fn ReportLinesOfReport(report_id: RecordId) -> impl IntoView {
    view! {
        <ResourceListPage
            resource=ReportLines::for_report(report_id)
            page_key=report_lines_tab_key(report_id)
            alternate_view=TREE_VIEW
        />
    }
}
