use contracts::domain::common::RecordId;
use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;
use thaw::*;

use crate::shared::crud::filter::{FilterKind, FilterSpec, FilterValue, TabSpec};
use crate::shared::crud::state::{ListAction, ListState};
use crate::shared::list_utils::SearchInput;

/// Reference collection key behind a filter, if the field has one
pub fn filter_collection(fields: &[FieldMetadata], spec: &FilterSpec) -> Option<&'static str> {
    fields
        .iter()
        .find(|f| f.name == spec.field)
        .and_then(|f| f.ref_collection)
}

/// Select value of a reference filter: the id or "" for "all"
pub fn parse_reference_choice(raw: &str) -> Option<FilterValue> {
    raw.trim().parse::<RecordId>().ok().map(FilterValue::Id)
}

pub fn parse_date_choice(raw: &str) -> Option<FilterValue> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| FilterValue::Date(raw.to_string()))
}

/// Search box, status tabs and field filters of a list page
#[component]
pub fn FilterBar(
    state: RwSignal<ListState>,
    tabs: Option<TabSpec>,
    filters: &'static [FilterSpec],
) -> impl IntoView {
    let dispatch = move |action: ListAction| {
        state.update(|s| {
            s.apply(action);
        });
    };
    let fields = state.with_untracked(|s| s.fields);

    let tab_strip = tabs.map(|spec| {
        view! {
            <div class="status-tabs">
                <button
                    class="status-tab"
                    class:status-tab--active=move || state.with(|s| s.tab.is_none())
                    on:click=move |_| dispatch(ListAction::TabChanged(None))
                >
                    "Все"
                </button>
                {spec
                    .values
                    .iter()
                    .map(|v| {
                        let code = v.value;
                        view! {
                            <button
                                class="status-tab"
                                class:status-tab--active=move || {
                                    state.with(|s| s.tab.as_deref() == Some(code))
                                }
                                on:click=move |_| {
                                    dispatch(ListAction::TabChanged(Some(code.to_string())))
                                }
                            >
                                {v.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    let controls = filters
        .iter()
        .map(|spec| {
            let field = spec.field;
            match spec.kind {
                FilterKind::Reference => {
                    let key = filter_collection(fields, spec).unwrap_or_default();
                    view! {
                        <div class="form__group filter-control">
                            <Label>{spec.label}</Label>
                            <select
                                class="form__select"
                                prop:value=move || {
                                    state.with(|s| match s.filters.get(field) {
                                        Some(FilterValue::Id(id)) => id.to_string(),
                                        _ => String::new(),
                                    })
                                }
                                on:change=move |ev| {
                                    let value = parse_reference_choice(&event_target_value(&ev));
                                    dispatch(ListAction::FilterChanged { field, value });
                                }
                            >
                                <option value="">"Все"</option>
                                {move || {
                                    state
                                        .with(|s| s.references.items(key).to_vec())
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <option value=item.id.to_string()>{item.label}</option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                    }
                    .into_any()
                }
                FilterKind::Date => view! {
                    <div class="form__group filter-control">
                        <Label>{spec.label}</Label>
                        <input
                            type="date"
                            class="form__input"
                            prop:value=move || {
                                state.with(|s| match s.filters.get(field) {
                                    Some(FilterValue::Date(d)) => d.clone(),
                                    _ => String::new(),
                                })
                            }
                            on:change=move |ev| {
                                let value = parse_date_choice(&event_target_value(&ev));
                                dispatch(ListAction::FilterChanged { field, value });
                            }
                        />
                    </div>
                }
                .into_any(),
            }
        })
        .collect_view();

    view! {
        <div class="filter-panel">
            {tab_strip}
            <div class="filter-panel-content">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.search.clone()))
                        on_change=Callback::new(move |term: String| {
                            dispatch(ListAction::SearchChanged(term))
                        })
                    />
                    {controls}
                </Flex>
            </div>
        </div>
    }
}
