use contracts::domain::a010_user_entity_affiliation::UserEntityAffiliation;

use crate::shared::crud::{FilterSpec, Resource};

const FILTERS: &[FilterSpec] = &[FilterSpec::reference("user_id", "Пользователь")];

#[derive(Debug, Clone, Copy, Default)]
pub struct Affiliations;

impl Resource for Affiliations {
    type Record = UserEntityAffiliation;

    fn filters(&self) -> &'static [FilterSpec] {
        FILTERS
    }

    fn new_record(&self) -> UserEntityAffiliation {
        UserEntityAffiliation {
            is_active: true,
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
        assert!(schema_problems(&Affiliations).is_empty());
        assert!(Affiliations.new_record().is_active);
    }
}
