//! Generic list page over a [`Resource`].
//!
//! Layout follows every other page: header with count and actions, banners,
//! filter panel with pagination, then the table. All list state lives in one
//! `RwSignal<ListState>` and changes only through `ListState::apply`.

use contracts::domain::common::RecordId;
use contracts::shared::metadata::FieldMetadata;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::detail_modal::DetailModal;
use super::filter_bar::FilterBar;
use super::form_modal::FormModal;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{format_money, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::crud::api::{delete_and_reload, load_resource, DeleteOutcome, Loaded};
use crate::shared::crud::filter::totals;
use crate::shared::crud::form::FormModel;
use crate::shared::crud::state::{ListAction, ListState, Notice, NoticeKind, Phase};
use crate::shared::crud::{Resource, Row};
use crate::shared::export::export_csv;
use crate::shared::http::BrowserClient;
use crate::shared::icons::icon;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};

/// What a row action gets when it runs
#[derive(Clone)]
pub struct RowActionContext {
    pub row: Row,
    /// Every loaded row, before filtering
    pub rows: Vec<Row>,
    pub reload: Callback<()>,
    pub notify: Callback<Notice>,
}

/// Extra button in the actions column
#[derive(Clone)]
pub struct RowAction {
    pub label: &'static str,
    pub icon: &'static str,
    pub visible: fn(&Row) -> bool,
    pub run: Callback<RowActionContext>,
}

/// Second rendering of the filtered rows, toggled from the header
#[derive(Clone, Copy)]
pub struct AlternateView {
    pub label: &'static str,
    pub icon: &'static str,
    pub render: fn(Vec<Row>) -> AnyView,
}

/// Header and cell strings of the rows to export
pub fn export_table(columns: &[&FieldMetadata], rows: &[Row]) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let headers = columns.iter().map(|f| f.label()).collect();
    let data = rows
        .iter()
        .map(|row| columns.iter().map(|f| row.display(f.name).to_string()).collect())
        .collect();
    (headers, data)
}

/// One string per column for the totals row: sums under amount columns,
/// the row count under the first column
pub fn totals_cells(columns: &[&FieldMetadata], rows: &[Row], fields: &[FieldMetadata]) -> Vec<String> {
    let sums = totals(rows, fields);
    columns
        .iter()
        .enumerate()
        .map(|(i, f)| match sums.get(f.name) {
            Some(sum) => format_money(*sum),
            None if i == 0 => format!("Итого: {}", rows.len()),
            None => String::new(),
        })
        .collect()
}

#[component]
pub fn ResourceListPage<R>(
    resource: R,
    /// Tab key, prefix of the page id
    #[prop(into)]
    page_key: String,
    #[prop(optional)] row_actions: Vec<RowAction>,
    #[prop(optional)] alternate_view: Option<AlternateView>,
) -> impl IntoView
where
    R: Resource,
{
    let fields = resource.fields();
    let caps = resource.capabilities();
    let tabs = resource.tabs();
    let filters = resource.filters();
    let title = resource.title();
    let element_name = resource.entity().ui.element_name;
    let export_name = StoredValue::new(format!("{}.csv", resource.entity().full_name()));
    let columns = StoredValue::new(
        fields
            .iter()
            .filter(|f| f.visible_in_list())
            .collect::<Vec<&'static FieldMetadata>>(),
    );

    let resource = StoredValue::new(resource);
    let api = StoredValue::new(BrowserClient::browser());
    let row_actions = StoredValue::new(row_actions);

    let state = RwSignal::new(ListState::new(fields, tabs.map(|t| t.field)));
    let form = RwSignal::new(None::<FormModel>);
    let detail = RwSignal::new(None::<Row>);
    let confirm_delete = RwSignal::new(None::<RecordId>);
    let show_alternate = RwSignal::new(false);

    let dispatch = move |action: ListAction| {
        let _ = state.try_update(|s| s.apply(action));
    };

    // A mutation takes its generation when it is sent; a refresh started later wins
    let begin_mutation = move || state.try_update(|s| s.begin_load()).unwrap_or_default();
    let accept = move |generation: u64, loaded: Loaded| {
        dispatch(ListAction::Loaded {
            generation,
            rows: loaded.rows,
            references: loaded.references,
        });
    };

    let reload = move || {
        let Some(generation) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        let api = api.get_value();
        let resource = resource.get_value();
        spawn_local(async move {
            let action = match load_resource(&api, &resource).await {
                Ok(loaded) => ListAction::Loaded {
                    generation,
                    rows: loaded.rows,
                    references: loaded.references,
                },
                Err(e) => {
                    log::error!("загрузка {} не удалась: {}", resource.entity().full_name(), e);
                    ListAction::LoadFailed {
                        generation,
                        message: e.to_string(),
                    }
                }
            };
            dispatch(action);
        });
    };

    Effect::new(move |_| reload());

    let reload_cb = Callback::new(move |_: ()| reload());
    let notify_cb = Callback::new(move |notice: Notice| dispatch(ListAction::Notice(Some(notice))));

    let decide_delete = move |id: RecordId, confirmed: bool| {
        confirm_delete.set(None);
        if !confirmed {
            return;
        }
        let generation = begin_mutation();
        let api = api.get_value();
        let resource = resource.get_value();
        spawn_local(async move {
            match delete_and_reload(&api, &resource, id, confirmed).await {
                Ok(DeleteOutcome::Declined) => dispatch(ListAction::LoadAbandoned { generation }),
                Ok(DeleteOutcome::Deleted(loaded)) => {
                    accept(generation, loaded);
                    dispatch(ListAction::Notice(Some(Notice::success("Запись удалена"))));
                }
                Err(msg) => {
                    dispatch(ListAction::LoadAbandoned { generation });
                    dispatch(ListAction::Notice(Some(Notice::error(msg))));
                }
            }
        });
    };

    let export_selected = move || {
        let rows = state.with_untracked(|s| s.selected_rows());
        let (headers, data) = columns.with_value(|cols| export_table(cols, &rows));
        let result = export_name.with_value(|name| export_csv(&headers, &data, name));
        if let Err(msg) = result {
            dispatch(ListAction::Notice(Some(Notice::error(msg))));
        }
    };

    let visible = Memo::new(move |_| state.with(|s| s.visible_rows()));
    let page_rows = Memo::new(move |_| state.with(|s| s.page_rows()));
    let is_loading = move || state.with(|s| s.is_loading());

    let render_row = move |row: Row| {
        let id = row.id;
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|f| {
                    let text = row.display(f.name).to_string();
                    let class = if f.field_type.is_numeric() { "text-right" } else { "" };
                    view! {
                        <TableCell class=class>
                            <TableCellLayout truncate=true>{text}</TableCellLayout>
                        </TableCell>
                    }
                })
                .collect_view()
        });

        let extra = row_actions
            .get_value()
            .into_iter()
            .filter(|a| (a.visible)(&row))
            .map(|a| {
                let row = row.clone();
                let run = a.run;
                view! {
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        attr:title=a.label
                        on_click=move |_| {
                            run.run(RowActionContext {
                                row: row.clone(),
                                rows: state.with_untracked(|s| s.rows.clone()),
                                reload: reload_cb,
                                notify: notify_cb,
                            })
                        }
                    >
                        {icon(a.icon)}
                    </Button>
                }
            })
            .collect_view();

        let view_row = row.clone();
        let edit_row = row.clone();

        view! {
            <TableRow>
                <TableCellCheckbox
                    item_id=id
                    selected=Signal::derive(move || state.with(|s| s.selected.clone()))
                    on_toggle=Callback::new(move |id| dispatch(ListAction::SelectionToggled(id)))
                />
                {cells}
                <TableCell>
                    <div class="table__actions">
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            attr:title="Просмотр"
                            on_click=move |_| detail.set(Some(view_row.clone()))
                        >
                            {icon("eye")}
                        </Button>
                        {caps.edit.then(|| view! {
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                attr:title="Редактировать"
                                on_click=move |_| form.set(Some(FormModel::for_edit(&edit_row)))
                            >
                                {icon("edit")}
                            </Button>
                        })}
                        {extra}
                        {caps.delete.then(|| view! {
                            <Show
                                when=move || confirm_delete.get() == Some(id)
                                fallback=move || view! {
                                    <Button
                                        appearance=ButtonAppearance::Subtle
                                        size=ButtonSize::Small
                                        attr:title="Удалить"
                                        on_click=move |_| confirm_delete.set(Some(id))
                                    >
                                        {icon("trash")}
                                    </Button>
                                }
                            >
                                <span class="table__confirm">"Удалить?"</span>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    size=ButtonSize::Small
                                    on_click=move |_| decide_delete(id, true)
                                >
                                    "Да"
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    size=ButtonSize::Small
                                    on_click=move |_| decide_delete(id, false)
                                >
                                    "Нет"
                                </Button>
                            </Show>
                        })}
                    </div>
                </TableCell>
            </TableRow>
        }
    };

    let table = move || {
        let header_cells = columns.with_value(|cols| {
            cols.iter()
                .map(|&f: &&'static FieldMetadata| {
                    let name = f.name;
                    let current = move || state.with(|s| s.sort.map(|x| x.field));
                    let ascending = move || state.with(|s| s.sort.map_or(true, |x| x.ascending));
                    view! {
                        <TableHeaderCell resizable=true min_width=80.0>
                            <div
                                class="table__sortable-header"
                                style="cursor: pointer;"
                                on:click=move |_| dispatch(ListAction::SortBy(name))
                            >
                                {f.label()}
                                <span class=move || get_sort_class(current(), name)>
                                    {move || get_sort_indicator(current(), name, ascending())}
                                </span>
                            </div>
                        </TableHeaderCell>
                    }
                })
                .collect_view()
        });
        let column_count = columns.with_value(|cols| cols.len()) + 2;

        view! {
            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCheckbox
                                page_ids=Signal::derive(move || {
                                    page_rows.with(|rows| rows.iter().map(|r| r.id).collect::<Vec<_>>())
                                })
                                selected=Signal::derive(move || state.with(|s| s.selected.clone()))
                                on_change=Callback::new(move |all: bool| {
                                    dispatch(ListAction::SelectAllOnPage(all))
                                })
                            />
                            {header_cells}
                            <TableHeaderCell resizable=false min_width=140.0>
                                "Действия"
                            </TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || {
                                let generation = state.with(|s| s.generation);
                                page_rows
                                    .get()
                                    .into_iter()
                                    .map(|row| (generation, row))
                                    .collect::<Vec<_>>()
                            }
                            key=|(generation, row)| (*generation, row.id)
                            children=move |(_, row)| render_row(row)
                        />
                        {move || {
                            let empty = state.with(|s| s.phase == Phase::Loaded)
                                && visible.with(|v| v.is_empty());
                            empty.then(|| view! {
                                <tr>
                                    <td class="table__empty" colspan=column_count.to_string()>
                                        "Нет данных"
                                    </td>
                                </tr>
                            })
                        }}
                        {caps.totals.then(|| view! {
                            <tr class="table__totals-row">
                                <td></td>
                                {move || {
                                    let cells = columns.with_value(|cols| {
                                        visible.with(|rows| totals_cells(cols, rows, fields))
                                    });
                                    cells
                                        .into_iter()
                                        .map(|text| view! { <td class="text-right"><b>{text}</b></td> })
                                        .collect_view()
                                }}
                                <td></td>
                            </tr>
                        })}
                    </TableBody>
                </Table>
            </div>
        }
    };

    view! {
        <PageFrame page_id=format!("{}--list", page_key) category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                    <Badge>{move || visible.with(|v| v.len()).to_string()}</Badge>
                </div>
                <div class="page__header-right">
                    <Flex gap=FlexGap::Small>
                        {caps.create.then(|| view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| {
                                    let seed = resource.with_value(|r| r.new_record());
                                    form.set(Some(FormModel::for_create(&seed)));
                                }
                            >
                                {icon("plus")}
                                " Создать"
                            </Button>
                        })}
                        {caps.export.then(|| view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| export_selected()
                                disabled=Signal::derive(move || state.with(|s| s.selected.is_empty()))
                            >
                                {icon("download")}
                                {move || format!(" Экспорт ({})", state.with(|s| s.selected.len()))}
                            </Button>
                        })}
                        {alternate_view.map(|alt| view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| show_alternate.update(|v| *v = !*v)
                            >
                                {move || if show_alternate.get() { icon("table") } else { icon(alt.icon) }}
                                {move || if show_alternate.get() { " Таблица" } else { alt.label }}
                            </Button>
                        })}
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| reload()
                            disabled=Signal::derive(is_loading)
                        >
                            {icon("refresh")}
                            {move || if is_loading() { " Загрузка..." } else { " Обновить" }}
                        </Button>
                    </Flex>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    state.with(|s| s.notice.clone()).map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "alert alert--success",
                            NoticeKind::Error => "alert alert--error",
                        };
                        view! {
                            <div class=class>
                                <span>{notice.text}</span>
                                <button class="alert__close" on:click=move |_| dispatch(ListAction::Notice(None))>
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    })
                }}
                {move || match state.with(|s| s.phase.clone()) {
                    Phase::Failed(message) => Some(view! {
                        <div class="alert alert--error">
                            <span>{format!("Не удалось загрузить данные: {}", message)}</span>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| reload()>
                                "Обновить"
                            </Button>
                        </div>
                    }),
                    _ => None,
                }}

                <FilterBar state=state tabs=tabs filters=filters />

                <div class="filter-panel-header">
                    <PaginationControls
                        current_page=Signal::derive(move || state.with(|s| s.page))
                        total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                        total_count=Signal::derive(move || visible.with(|v| v.len()))
                        page_size=Signal::derive(move || state.with(|s| s.page_size))
                        on_page_change=Callback::new(move |page| dispatch(ListAction::PageRequested(page)))
                        on_page_size_change=Callback::new(move |size| {
                            dispatch(ListAction::PageSizeChanged(size))
                        })
                    />
                </div>

                {move || match alternate_view {
                    Some(alt) if show_alternate.get() => (alt.render)(visible.get()),
                    _ => table().into_any(),
                }}
            </div>

            {move || {
                form.get().map(|model| view! {
                    <FormModal
                        resource=resource.get_value()
                        model=model
                        references=state.with_untracked(|s| s.references.clone())
                        on_close=Callback::new(move |_| form.set(None))
                        begin_load=Callback::new(move |_: ()| begin_mutation())
                        on_saved=Callback::new(move |(generation, loaded): (u64, Loaded)| {
                            form.set(None);
                            accept(generation, loaded);
                            dispatch(ListAction::Notice(Some(Notice::success("Сохранено"))));
                        })
                        on_failed=Callback::new(move |generation: u64| {
                            dispatch(ListAction::LoadAbandoned { generation })
                        })
                    />
                })
            }}
            {move || {
                detail.get().map(|row| view! {
                    <DetailModal
                        title=element_name
                        fields=fields
                        row=row
                        on_close=Callback::new(move |_| detail.set(None))
                    />
                })
            }}
        </PageFrame>
    }
}
