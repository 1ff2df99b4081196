use leptos::prelude::*;

use crate::domain::a005_supplier_price::resource::SupplierPrices;
use crate::shared::crud::ui::ResourceListPage;

#[component]
pub fn SupplierPriceList() -> impl IntoView {
    view! { <ResourceListPage resource=SupplierPrices page_key="a005_supplier_price" /> }
}
