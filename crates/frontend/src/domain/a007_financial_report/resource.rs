use contracts::domain::a007_financial_report::FinancialReport;

use crate::shared::crud::Resource;

#[derive(Debug, Clone, Copy, Default)]
pub struct FinancialReports;

impl Resource for FinancialReports {
    type Record = FinancialReport;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::resource::schema_problems;

    #[test]
    fn test_schema_is_consistent() {
        assert!(schema_problems(&FinancialReports).is_empty());
    }
}
