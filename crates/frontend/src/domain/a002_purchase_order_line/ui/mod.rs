use leptos::prelude::*;

use crate::domain::a002_purchase_order_line::resource::PurchaseOrderLines;
use crate::shared::crud::ui::ResourceListPage;

#[component]
pub fn PurchaseOrderLineList() -> impl IntoView {
    view! { <ResourceListPage resource=PurchaseOrderLines page_key="a002_purchase_order_line" /> }
}
