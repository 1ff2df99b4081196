use contracts::domain::a005_supplier_price::SupplierPrice;

use crate::shared::crud::{FilterSpec, Resource};

const FILTERS: &[FilterSpec] = &[
    FilterSpec::reference("supplier_id", "Поставщик"),
    FilterSpec::reference("product_id", "Товар"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SupplierPrices;

impl Resource for SupplierPrices {
    type Record = SupplierPrice;

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
        assert!(schema_problems(&SupplierPrices).is_empty());
    }
}
