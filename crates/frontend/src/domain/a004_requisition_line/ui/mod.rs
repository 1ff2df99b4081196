use leptos::prelude::*;

use crate::domain::a004_requisition_line::resource::RequisitionLines;
use crate::shared::crud::ui::ResourceListPage;

#[component]
pub fn RequisitionLineList() -> impl IntoView {
    view! { <ResourceListPage resource=RequisitionLines page_key="a004_requisition_line" /> }
}
