use contracts::domain::a006_sales_order_line::SalesOrderLine;
use contracts::enums::InvoiceStatus;

use crate::shared::crud::{FilterSpec, Resource, TabSpec};

const FILTERS: &[FilterSpec] = &[FilterSpec::reference("order_id", "Заказ")];

#[derive(Debug, Clone, Copy, Default)]
pub struct SalesOrderLines;

impl Resource for SalesOrderLines {
    type Record = SalesOrderLine;

    fn tabs(&self) -> Option<TabSpec> {
        Some(TabSpec {
            field: "invoice_status",
            values: InvoiceStatus::VALUES,
        })
    }

    fn filters(&self) -> &'static [FilterSpec] {
        FILTERS
    }
}
