use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a010_user_entity_affiliation::default_switch::{is_default, make_default};
use crate::domain::a010_user_entity_affiliation::resource::Affiliations;
use crate::shared::crud::state::Notice;
use crate::shared::crud::ui::{ResourceListPage, RowAction, RowActionContext};
use crate::shared::http::BrowserClient;

#[component]
pub fn AffiliationList() -> impl IntoView {
    let make_default_action = Callback::new(move |ctx: RowActionContext| {
        spawn_local(async move {
            let api = BrowserClient::browser();
            match make_default(&api, &ctx.rows, &ctx.row).await {
                Ok(_) => ctx.notify.run(Notice::success("Основная привязка изменена")),
                Err(e) => {
                    log::error!("{}", e);
                    ctx.notify.run(Notice::error(e.to_string()));
                }
            }
            // Partial sequences leave the server in a mixed state; always show it
            ctx.reload.run(());
        });
    });
    let actions = vec![RowAction {
        label: "Сделать основной",
        icon: "star",
        visible: |row| !is_default(row),
        run: make_default_action,
    }];

    view! {
        <ResourceListPage
            resource=Affiliations
            page_key="a010_user_entity_affiliation"
            row_actions=actions
        />
    }
}
