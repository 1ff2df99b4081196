use leptos::prelude::*;

use crate::projections::p900_sales_reporting::resource::SalesReporting;
use crate::shared::crud::ui::ResourceListPage;

#[component]
pub fn SalesReportingList() -> impl IntoView {
    view! { <ResourceListPage resource=SalesReporting page_key="p900_sales_reporting" /> }
}
