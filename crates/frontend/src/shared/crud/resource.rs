//! Declarative description of one list page.
//!
//! A concrete page is a small struct implementing [`Resource`]: the record
//! type brings the endpoint, fields and references through its metadata, the
//! implementation adds tabs, filters, capabilities and scoping.

use contracts::domain::common::{Entity, RecordId};
use contracts::shared::metadata::{EntityMetadataInfo, FieldMetadata, ReferenceMetadata};

use super::filter::{FilterSpec, TabSpec};
use super::row::Row;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub create: bool,
    pub edit: bool,
    pub delete: bool,
    pub export: bool,
    /// Totals row over the amount columns
    pub totals: bool,
}

impl Capabilities {
    pub const fn full() -> Self {
        Self {
            create: true,
            edit: true,
            delete: true,
            export: true,
            totals: false,
        }
    }

    pub const fn read_only() -> Self {
        Self {
            create: false,
            edit: false,
            delete: false,
            export: true,
            totals: true,
        }
    }
}

pub trait Resource: Clone + Send + Sync + 'static {
    type Record: Entity;

    fn entity(&self) -> &'static EntityMetadataInfo {
        Self::Record::entity_metadata_info()
    }

    fn fields(&self) -> &'static [FieldMetadata] {
        Self::Record::field_metadata()
    }

    fn references(&self) -> &'static [ReferenceMetadata] {
        Self::Record::reference_metadata()
    }

    fn title(&self) -> String {
        self.entity().ui.list_name.to_string()
    }

    /// GET endpoint of the list, may carry a query string
    fn list_endpoint(&self) -> String {
        self.entity().collection_name.to_string()
    }

    /// POST endpoint for new records
    fn create_endpoint(&self) -> String {
        self.entity().collection_name.to_string()
    }

    /// PUT/PATCH/DELETE endpoint of one record
    fn item_endpoint(&self, id: RecordId) -> String {
        self.entity().item_path(id)
    }

    fn tabs(&self) -> Option<TabSpec> {
        None
    }

    fn filters(&self) -> &'static [FilterSpec] {
        &[]
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::full()
    }

    /// Seed of the create form
    fn new_record(&self) -> Self::Record {
        Self::Record::default()
    }

    /// Client-side scope applied right after loading
    fn in_scope(&self, _row: &Row) -> bool {
        true
    }
}

/// Configuration mistakes a resource can make against its own metadata
#[cfg(test)]
pub(crate) fn schema_problems<R: Resource>(resource: &R) -> Vec<String> {
    use super::filter::FilterKind;
    use contracts::shared::metadata::FieldType;

    let fields = resource.fields();
    let find = |name: &str| fields.iter().find(|f| f.name == name);
    let mut problems = Vec::new();

    if let Some(tab) = resource.tabs() {
        match find(tab.field) {
            Some(f) if f.field_type == FieldType::Enum && f.enum_values == Some(tab.values) => {}
            _ => problems.push(format!("tab field {} is not a matching enum", tab.field)),
        }
    }
    for spec in resource.filters() {
        let Some(field) = find(spec.field) else {
            problems.push(format!("filter on unknown field {}", spec.field));
            continue;
        };
        let ok = match spec.kind {
            FilterKind::Reference => field.ref_collection.is_some_and(|key| {
                resource.references().iter().any(|r| r.key == key)
            }),
            FilterKind::Date => field.field_type == FieldType::Date,
        };
        if !ok {
            problems.push(format!("filter {} does not fit its field", spec.field));
        }
    }
    for field in fields.iter().filter(|f| f.ref_collection.is_some()) {
        let key = field.ref_collection.unwrap_or_default();
        if !resource.references().iter().any(|r| r.key == key) {
            problems.push(format!("{} references unloaded collection {}", field.name, key));
        }
    }
    problems
}
