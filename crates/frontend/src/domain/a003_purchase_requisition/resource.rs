use contracts::domain::a003_purchase_requisition::PurchaseRequisition;
use contracts::enums::RequisitionStatus;

use crate::shared::crud::{FilterSpec, Resource, TabSpec};
use crate::shared::date_utils::today_iso;

const FILTERS: &[FilterSpec] = &[FilterSpec::reference("department_id", "Подразделение")];

#[derive(Debug, Clone, Copy, Default)]
pub struct PurchaseRequisitions;

impl Resource for PurchaseRequisitions {
    type Record = PurchaseRequisition;

    fn tabs(&self) -> Option<TabSpec> {
        Some(TabSpec {
            field: "status",
            values: RequisitionStatus::VALUES,
        })
    }

    fn filters(&self) -> &'static [FilterSpec] {
        FILTERS
    }

    fn new_record(&self) -> PurchaseRequisition {
        PurchaseRequisition {
            start_date: today_iso(),
            ..Default::default()
        }
    }
}
