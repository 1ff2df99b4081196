use contracts::domain::a009_partner_bank_account::PartnerBankAccount;

use crate::shared::crud::{FilterSpec, Resource};

const FILTERS: &[FilterSpec] = &[
    FilterSpec::reference("partner_id", "Партнёр"),
    FilterSpec::reference("entity_id", "Юрлицо"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct PartnerBankAccounts;

impl Resource for PartnerBankAccounts {
    type Record = PartnerBankAccount;

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
        assert!(schema_problems(&PartnerBankAccounts).is_empty());
    }
}
