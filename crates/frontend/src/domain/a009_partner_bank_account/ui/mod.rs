use leptos::prelude::*;

use crate::domain::a009_partner_bank_account::resource::PartnerBankAccounts;
use crate::shared::crud::ui::ResourceListPage;

#[component]
pub fn PartnerBankAccountList() -> impl IntoView {
    view! { <ResourceListPage resource=PartnerBankAccounts page_key="a009_partner_bank_account" /> }
}
