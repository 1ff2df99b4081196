use leptos::prelude::*;

use crate::domain::a006_sales_order_line::resource::SalesOrderLines;
use crate::shared::crud::ui::ResourceListPage;

#[component]
pub fn SalesOrderLineList() -> impl IntoView {
    view! { <ResourceListPage resource=SalesOrderLines page_key="a006_sales_order_line" /> }
}
