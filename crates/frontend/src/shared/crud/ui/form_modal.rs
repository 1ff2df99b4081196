use contracts::domain::common::RecordId;
use contracts::shared::metadata::{FieldMetadata, FieldType};
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::shared::crud::api::{submit_and_reload, Loaded};
use crate::shared::crud::form::FormModel;
use crate::shared::crud::references::ReferenceData;
use crate::shared::crud::Resource;
use crate::shared::http::BrowserClient;
use crate::shared::modal_frame::ModalFrame;

pub fn form_title(element_name: &str, model: &FormModel) -> String {
    if model.is_edit() {
        format!("Редактирование: {}", element_name)
    } else {
        format!("Создание: {}", element_name)
    }
}

fn field_label(field: &FieldMetadata) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

fn selected_ids(ev: &Event) -> Vec<RecordId> {
    let Some(select) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
    else {
        return Vec::new();
    };
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
        .filter_map(|opt| opt.value().parse().ok())
        .collect()
}

fn field_input(
    field: &'static FieldMetadata,
    model: RwSignal<FormModel>,
    references: StoredValue<ReferenceData>,
) -> AnyView {
    let name = field.name;
    let text = move || model.with(|m| m.input_text(name));
    let set = move |ev: Event| {
        let raw = event_target_value(&ev);
        model.update(|m| m.set_input(field, &raw));
    };
    let ref_items = move || {
        references.with_value(|r| r.items(field.ref_collection.unwrap_or_default()).to_vec())
    };

    let control = match field.field_type {
        FieldType::Text => view! {
            <input
                type="text"
                class="form__input"
                placeholder=field.ui.placeholder.unwrap_or_default()
                prop:value=text
                on:input=set
            />
        }
        .into_any(),
        FieldType::LongText => view! {
            <textarea class="form__input" rows="3" prop:value=text on:input=set></textarea>
        }
        .into_any(),
        FieldType::Number => view! {
            <input type="number" step="any" class="form__input" prop:value=text on:input=set />
        }
        .into_any(),
        FieldType::Integer => view! {
            <input type="number" step="1" class="form__input" prop:value=text on:input=set />
        }
        .into_any(),
        FieldType::Date => view! {
            <input type="date" class="form__input" prop:value=text on:input=set />
        }
        .into_any(),
        FieldType::DateTime => view! {
            <input type="text" class="form__input" prop:value=text readonly=true />
        }
        .into_any(),
        FieldType::Bool => view! {
            <input
                type="checkbox"
                class="form__checkbox"
                prop:checked=move || {
                    model.with(|m| m.value(name).and_then(Value::as_bool).unwrap_or(false))
                }
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    model.update(|m| m.set_bool(field, checked));
                }
            />
        }
        .into_any(),
        FieldType::Enum => view! {
            <select class="form__select" prop:value=text on:change=set>
                {field
                    .enum_values
                    .unwrap_or_default()
                    .iter()
                    .map(|v| view! { <option value=v.value>{v.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldType::Sign => view! {
            <select class="form__select" prop:value=text on:change=set>
                <option value="1">"+1"</option>
                <option value="-1">"−1"</option>
            </select>
        }
        .into_any(),
        FieldType::AggregateRef => view! {
            <select class="form__select" prop:value=text on:change=set>
                <option value="">"—"</option>
                {ref_items()
                    .into_iter()
                    .map(|item| view! { <option value=item.id.to_string()>{item.label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldType::AggregateRefList => view! {
            <select
                class="form__select"
                multiple=true
                size="5"
                on:change=move |ev| {
                    let ids = selected_ids(&ev);
                    model.update(|m| m.set_ids(field, ids));
                }
            >
                {ref_items()
                    .into_iter()
                    .map(|item| {
                        let id = item.id;
                        view! {
                            <option
                                value=id.to_string()
                                prop:selected=move || model.with(|m| m.ids(name).contains(&id))
                            >
                                {item.label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label">{field_label(field)}</label>
            {control}
        </div>
    }
    .into_any()
}

/// Create/edit form built from field metadata.
///
/// Required fields are checked before anything is sent. `begin_load` hands out
/// the list generation the reload will carry; a successful save passes it back
/// with the reloaded list to `on_saved`, a failure goes to `on_failed` and the
/// message stays in the modal.
#[component]
pub fn FormModal<R: Resource>(
    resource: R,
    model: FormModel,
    references: ReferenceData,
    on_close: Callback<()>,
    begin_load: Callback<(), u64>,
    on_saved: Callback<(u64, Loaded)>,
    on_failed: Callback<u64>,
) -> impl IntoView {
    let fields = resource.fields();
    let title = form_title(resource.entity().ui.element_name, &model);
    let resource = StoredValue::new(resource);
    let references = StoredValue::new(references);
    let model = RwSignal::new(model);
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let form = model.get_untracked();
        if let Err(msg) = form.validate(fields) {
            error.set(Some(msg));
            return;
        }
        saving.set(true);
        error.set(None);
        let generation = begin_load.run(());
        let resource = resource.get_value();
        spawn_local(async move {
            let api = BrowserClient::browser();
            match submit_and_reload(&api, &resource, form).await {
                Ok(loaded) => on_saved.run((generation, loaded)),
                Err(msg) => {
                    log::error!("сохранение не удалось: {}", msg);
                    on_failed.run(generation);
                    let _ = error.try_set(Some(msg));
                    let _ = saving.try_set(false);
                }
            }
        });
    };

    view! {
        <ModalFrame title=title on_close=on_close modal_class="modal--form" close_on_overlay=false>
            <form on:submit=on_submit>
                <div class="modal-body">
                    {move || {
                        error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })
                    }}
                    {fields
                        .iter()
                        .filter(|f| f.visible_in_form())
                        .map(|f| field_input(f, model, references))
                        .collect_view()}
                </div>
                <div class="modal-footer">
                    <button
                        type="button"
                        class="btn btn--secondary"
                        on:click=move |_| on_close.run(())
                        disabled=move || saving.get()
                    >
                        "Отмена"
                    </button>
                    <button type="submit" class="btn btn--primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Сохранение..." } else { "Сохранить" }}
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
