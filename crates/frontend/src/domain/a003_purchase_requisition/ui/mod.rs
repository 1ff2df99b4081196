use leptos::prelude::*;

use crate::domain::a003_purchase_requisition::resource::PurchaseRequisitions;
use crate::shared::crud::ui::ResourceListPage;

#[component]
pub fn PurchaseRequisitionList() -> impl IntoView {
    view! { <ResourceListPage resource=PurchaseRequisitions page_key="a003_purchase_requisition" /> }
}
