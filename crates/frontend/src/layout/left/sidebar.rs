//! Sidebar: menu groups by module, each item opens a tab

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn item(key: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (key, tab_label_for_key(key), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "purchases",
            label: "Закупки",
            icon: "purchases",
            items: vec![
                item("a001_purchase_order", "purchases"),
                item("a002_purchase_order_line", "table"),
                item("a003_purchase_requisition", "orders"),
                item("a004_requisition_line", "table"),
                item("a005_supplier_price", "payments"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Продажи",
            icon: "orders",
            items: vec![
                item("a006_sales_order_line", "table"),
                item("p900_sales_reporting", "invoices"),
            ],
        },
        MenuGroup {
            id: "finance",
            label: "Финансы",
            icon: "invoices",
            items: vec![
                item("a007_financial_report", "invoices"),
                item("a008_report_line", "tree"),
            ],
        },
        MenuGroup {
            id: "partners",
            label: "Партнёры",
            icon: "customers",
            items: vec![
                item("a009_partner_bank_account", "payments"),
                item("a010_user_entity_affiliation", "users"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let expanded_groups = RwSignal::new(vec!["purchases"]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let toggle = move |_| {
                        expanded_groups.update(|items| {
                            if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                items.remove(pos);
                            } else {
                                items.push(group_id);
                            }
                        })
                    };
                    let is_expanded = move || expanded_groups.with(|items| items.contains(&group_id));
                    let items = StoredValue::new(group.items);

                    view! {
                        <div>
                            <div class="app-sidebar__item" style:padding-left="12px" on:click=toggle>
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|(id, label, icon_name)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.with(|a| a.as_deref() == Some(id))
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| ctx.open_tab(id, label)
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(icon_name)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tabs::registry::TabRoute;
    use crate::shared::icons::ICONS;

    #[test]
    fn test_every_menu_item_opens_a_page() {
        for group in get_menu_groups() {
            for (key, label, icon_name) in group.items {
                assert!(TabRoute::from_key(key).is_some(), "{key} has no page");
                assert!(!label.is_empty(), "{key} has no label");
                assert!(ICONS.iter().any(|(name, _)| *name == icon_name), "{icon_name}");
            }
        }
    }
}
