//! Чекбокс в заголовке таблицы: выбрать/снять все строки текущей страницы

use contracts::domain::common::RecordId;
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Состояние по строкам страницы и выбранным ID
pub fn header_state(page_ids: &[RecordId], selected: &BTreeSet<RecordId>) -> CheckboxState {
    let selected_count = page_ids.iter().filter(|id| selected.contains(id)).count();
    if page_ids.is_empty() || selected_count == 0 {
        CheckboxState::Unchecked
    } else if selected_count == page_ids.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

#[component]
pub fn TableHeaderCheckbox(
    /// ID строк текущей страницы
    #[prop(into)]
    page_ids: Signal<Vec<RecordId>>,

    #[prop(into)]
    selected: Signal<BTreeSet<RecordId>>,

    /// true = выбрать все, false = снять все
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state =
        Signal::derive(move || selected.with(|sel| page_ids.with(|ids| header_state(ids, sel))));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, CheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), CheckboxState::Checked)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_state() {
        let selected = BTreeSet::from([1, 2]);
        assert_eq!(header_state(&[1, 2], &selected), CheckboxState::Checked);
        assert_eq!(header_state(&[1, 2, 3], &selected), CheckboxState::Indeterminate);
        assert_eq!(header_state(&[3, 4], &selected), CheckboxState::Unchecked);
        assert_eq!(header_state(&[], &selected), CheckboxState::Unchecked);
    }
}
