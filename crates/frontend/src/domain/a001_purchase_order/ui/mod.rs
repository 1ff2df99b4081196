use leptos::prelude::*;

use crate::domain::a001_purchase_order::resource::PurchaseOrders;
use crate::shared::crud::ui::ResourceListPage;

#[component]
pub fn PurchaseOrderList() -> impl IntoView {
    view! { <ResourceListPage resource=PurchaseOrders page_key="a001_purchase_order" /> }
}
