use contracts::domain::a002_purchase_order_line::PurchaseOrderLine;

use crate::shared::crud::{FilterSpec, Resource};

const FILTERS: &[FilterSpec] = &[FilterSpec::reference("order_id", "Заказ")];

#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseOrderLines;

impl Resource for PurchaseOrderLines {
    type Record = PurchaseOrderLine;

    fn filters(&self) -> &'static [FilterSpec] {
        FILTERS
    }
}
