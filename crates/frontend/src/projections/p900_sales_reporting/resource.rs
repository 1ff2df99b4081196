use contracts::projections::p900_sales_reporting::SalesReportRow;

use crate::shared::crud::{Capabilities, FilterSpec, Resource};

const FILTERS: &[FilterSpec] = &[
    FilterSpec::reference("customer_id", "Клиент"),
    FilterSpec::date("order_date", "Дата"),
];

/// Sales analysis rows; the backend computes them, the page only reads
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesReporting;

impl Resource for SalesReporting {
    type Record = SalesReportRow;

    fn filters(&self) -> &'static [FilterSpec] {
        FILTERS
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::read_only()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::resource::schema_problems;

    #[test]
    fn test_read_only_with_totals() {
        let caps = SalesReporting.capabilities();
        assert!(!caps.create && !caps.edit && !caps.delete);
        assert!(caps.totals);
        assert!(schema_problems(&SalesReporting).is_empty());
    }
}
