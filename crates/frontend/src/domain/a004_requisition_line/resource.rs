use contracts::domain::a004_requisition_line::RequisitionLine;

use crate::shared::crud::{FilterSpec, Resource};

const FILTERS: &[FilterSpec] = &[FilterSpec::reference("requisition_id", "Заявка")];

#[derive(Debug, Clone, Copy, Default)]
pub struct RequisitionLines;

impl Resource for RequisitionLines {
    type Record = RequisitionLine;

    fn filters(&self) -> &'static [FilterSpec] {
        FILTERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::resource::schema_problems;

    #[test]
    fn test_schema_is_consistent() {
        assert!(schema_problems(&RequisitionLines).is_empty());
    }
}
