use contracts::shared::metadata::{FieldMetadata, FieldSection};
use leptos::prelude::*;

use crate::shared::crud::Row;
use crate::shared::modal_frame::ModalFrame;

/// Label/value pairs grouped by section, empty sections dropped
pub fn detail_sections(
    fields: &[FieldMetadata],
    row: &Row,
) -> Vec<(FieldSection, Vec<(&'static str, String)>)> {
    FieldSection::ALL
        .iter()
        .filter_map(|section| {
            let items: Vec<(&'static str, String)> = fields
                .iter()
                .filter(|f| f.section == *section)
                .map(|f| {
                    let value = row.display(f.name);
                    let value = if value.is_empty() { "—" } else { value };
                    (f.label(), value.to_string())
                })
                .collect();
            (!items.is_empty()).then_some((*section, items))
        })
        .collect()
}

/// Read-only view of one record; references are already resolved in the row
#[component]
pub fn DetailModal(
    #[prop(into)] title: String,
    fields: &'static [FieldMetadata],
    row: Row,
    on_close: Callback<()>,
) -> impl IntoView {
    let sections = detail_sections(fields, &row)
        .into_iter()
        .map(|(section, items)| {
            view! {
                <section class="detail-section">
                    <h4 class="detail-section__title">{section.title()}</h4>
                    <dl class="detail-grid">
                        {items
                            .into_iter()
                            .map(|(label, value)| view! { <dt>{label}</dt><dd>{value}</dd> })
                            .collect_view()}
                    </dl>
                </section>
            }
        })
        .collect_view();

    view! {
        <ModalFrame title=format!("{} #{}", title, row.id) on_close=on_close modal_class="modal--detail">
            <div class="modal-body">{sections}</div>
            <div class="modal-footer">
                <button type="button" class="btn btn--secondary" on:click=move |_| on_close.run(())>
                    "Закрыть"
                </button>
            </div>
        </ModalFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::references::{RefItem, ReferenceData};
    use contracts::domain::a001_purchase_order::PurchaseOrder;
    use contracts::domain::common::Entity;

    #[test]
    fn test_sections_follow_metadata() {
        let mut refs = ReferenceData::default();
        refs.insert("partners", vec![RefItem { id: 4, label: "ООО Бета".into() }]);
        let po = PurchaseOrder {
            id: Some(1),
            number: "PO-1".into(),
            supplier_id: Some(4),
            amount_total: 10.0,
            ..Default::default()
        };
        let row = Row::project(&po, &refs).unwrap();
        let sections = detail_sections(PurchaseOrder::field_metadata(), &row);

        let titles: Vec<_> = sections.iter().map(|(s, _)| *s).collect();
        assert_eq!(
            titles,
            vec![
                FieldSection::Identification,
                FieldSection::Amounts,
                FieldSection::Status,
                FieldSection::Audit
            ]
        );
        let ident = &sections[0].1;
        assert!(ident.contains(&("Поставщик", "ООО Бета".to_string())));
        assert!(ident.contains(&("Валюта", "N/A".to_string())));
        let audit = &sections[3].1;
        assert!(audit.iter().all(|(_, v)| v == "—"));
    }
}
