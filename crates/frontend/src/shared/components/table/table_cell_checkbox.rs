//! Чекбокс выбора строки; клик не доходит до строки

use contracts::domain::common::RecordId;
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;

#[component]
pub fn TableCellCheckbox(
    item_id: RecordId,

    #[prop(into)]
    selected: Signal<BTreeSet<RecordId>>,

    on_toggle: Callback<RecordId>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.with(|sel| sel.contains(&item_id))
                on:change=move |_| on_toggle.run(item_id)
            />
        </TableCell>
    }
}
