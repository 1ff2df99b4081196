use contracts::domain::a001_purchase_order::PurchaseOrder;
use contracts::enums::PurchaseOrderStatus;

use crate::shared::crud::{FilterSpec, Resource, TabSpec};
use crate::shared::date_utils::today_iso;

const FILTERS: &[FilterSpec] = &[
    FilterSpec::reference("supplier_id", "Поставщик"),
    FilterSpec::date("order_date", "Дата заказа"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseOrders;

impl Resource for PurchaseOrders {
    type Record = PurchaseOrder;

    fn tabs(&self) -> Option<TabSpec> {
        Some(TabSpec {
            field: "status",
            values: PurchaseOrderStatus::VALUES,
        })
    }

    fn filters(&self) -> &'static [FilterSpec] {
        FILTERS
    }

    /// New orders are dated today
    fn new_record(&self) -> PurchaseOrder {
        PurchaseOrder {
            order_date: today_iso(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::resource::schema_problems;

    #[test]
    fn test_schema_is_consistent() {
        assert!(schema_problems(&PurchaseOrders).is_empty());
    }

    #[test]
    fn test_new_record_is_dated_draft() {
        let po = PurchaseOrders.new_record();
        assert_eq!(po.order_date.len(), 10);
        assert_eq!(po.status, PurchaseOrderStatus::Draft);
        assert_eq!(po.id, None);
    }
}
