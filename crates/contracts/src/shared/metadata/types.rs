//! Core metadata types for aggregates and projections
//!
//! All types use 'static lifetimes for zero-cost compile-time constants.

use super::field_type::{FieldSection, FieldType};
use super::validation::ValidationRules;

// ============================================================================
// Entity-level metadata
// ============================================================================

/// Metadata for an entity (aggregate or projection)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMetadataInfo {
    pub entity_type: EntityType,
    pub entity_name: &'static str,
    pub entity_index: &'static str,
    /// REST collection endpoint, e.g. `/purchases/purchase-orders/`
    pub collection_name: &'static str,
    pub ui: EntityUiMetadata,
}

impl EntityMetadataInfo {
    /// Item endpoint: `<collection><id>/`
    pub fn item_path(&self, id: i64) -> String {
        format!("{}{}/", self.collection_name, id)
    }

    /// `a001_purchase_order`
    pub fn full_name(&self) -> String {
        format!("{}_{}", self.entity_index, self.entity_name)
    }
}

/// Type of entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityType {
    Aggregate,
    Projection,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aggregate => "aggregate",
            Self::Projection => "projection",
        }
    }
}

/// UI metadata for entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityUiMetadata {
    pub element_name: &'static str,
    pub list_name: &'static str,
    pub icon: Option<&'static str>,
}

// ============================================================================
// Field-level metadata
// ============================================================================

/// Allowed value of an enum field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    pub value: &'static str,
    pub label: &'static str,
}

/// Metadata for a single field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetadata {
    pub name: &'static str,
    pub field_type: FieldType,
    pub section: FieldSection,
    pub ui: FieldUiMetadata,
    pub validation: ValidationRules,
    /// Key of the reference collection (see [`ReferenceMetadata::key`])
    pub ref_collection: Option<&'static str>,
    pub enum_values: Option<&'static [EnumValue]>,
}

/// UI metadata for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldUiMetadata {
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub visible_in_list: bool,
    pub visible_in_form: bool,
    /// Display value participates in the list text search
    pub searchable: bool,
}

impl FieldUiMetadata {
    pub const fn labeled(label: &'static str) -> Self {
        Self {
            label,
            placeholder: None,
            visible_in_list: false,
            visible_in_form: true,
            searchable: false,
        }
    }
}

impl FieldMetadata {
    const fn base(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            field_type,
            section: FieldSection::Identification,
            ui: FieldUiMetadata::labeled(label),
            validation: ValidationRules::none(),
            ref_collection: None,
            enum_values: None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldType::Text)
    }

    pub const fn long_text(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldType::LongText)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldType::Number).section(FieldSection::Amounts)
    }

    pub const fn integer(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldType::Integer)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldType::Date)
    }

    /// Server-maintained timestamp: audit section, never in the form
    pub const fn timestamp(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldType::DateTime)
            .section(FieldSection::Audit)
            .read_only()
    }

    pub const fn flag(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldType::Bool).section(FieldSection::Status)
    }

    pub const fn enumeration(
        name: &'static str,
        label: &'static str,
        values: &'static [EnumValue],
    ) -> Self {
        Self {
            enum_values: Some(values),
            ..Self::base(name, label, FieldType::Enum).section(FieldSection::Status)
        }
    }

    pub const fn sign(name: &'static str, label: &'static str) -> Self {
        Self::base(name, label, FieldType::Sign)
    }

    pub const fn reference(
        name: &'static str,
        label: &'static str,
        collection: &'static str,
    ) -> Self {
        Self {
            ref_collection: Some(collection),
            ..Self::base(name, label, FieldType::AggregateRef)
        }
    }

    pub const fn reference_list(
        name: &'static str,
        label: &'static str,
        collection: &'static str,
    ) -> Self {
        Self {
            ref_collection: Some(collection),
            ..Self::base(name, label, FieldType::AggregateRefList)
        }
    }

    pub const fn required(self) -> Self {
        Self {
            validation: ValidationRules {
                required: true,
                ..self.validation
            },
            ..self
        }
    }

    pub const fn min(self, min: f64) -> Self {
        Self {
            validation: self.validation.with_min(min),
            ..self
        }
    }

    pub const fn max(self, max: f64) -> Self {
        Self {
            validation: self.validation.with_max(max),
            ..self
        }
    }

    pub const fn max_length(self, max_length: usize) -> Self {
        Self {
            validation: self.validation.with_max_length(max_length),
            ..self
        }
    }

    /// Show as a list column
    pub const fn listed(self) -> Self {
        Self {
            ui: FieldUiMetadata {
                visible_in_list: true,
                ..self.ui
            },
            ..self
        }
    }

    pub const fn searchable(self) -> Self {
        Self {
            ui: FieldUiMetadata {
                searchable: true,
                ..self.ui
            },
            ..self
        }
    }

    /// Computed or maintained by the backend, shown but not edited
    pub const fn read_only(self) -> Self {
        Self {
            ui: FieldUiMetadata {
                visible_in_form: false,
                ..self.ui
            },
            ..self
        }
    }

    pub const fn placeholder(self, placeholder: &'static str) -> Self {
        Self {
            ui: FieldUiMetadata {
                placeholder: Some(placeholder),
                ..self.ui
            },
            ..self
        }
    }

    pub const fn section(self, section: FieldSection) -> Self {
        Self { section, ..self }
    }

    pub fn label(&self) -> &'static str {
        self.ui.label
    }

    pub fn is_required(&self) -> bool {
        self.validation.required
    }

    /// Check if field should be visible in list view
    pub fn visible_in_list(&self) -> bool {
        self.ui.visible_in_list
    }

    /// Check if field should be visible in form
    pub fn visible_in_form(&self) -> bool {
        self.ui.visible_in_form
    }

    /// Human label of an enum value, `None` for unknown values
    pub fn enum_label(&self, value: &str) -> Option<&'static str> {
        self.enum_values?
            .iter()
            .find(|v| v.value == value)
            .map(|v| v.label)
    }
}

// ============================================================================
// Reference collections
// ============================================================================

/// A side-loaded collection used only to turn foreign keys into labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceMetadata {
    pub key: &'static str,
    pub collection_name: &'static str,
    /// Candidate display fields, first non-empty wins
    pub label_fields: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATUS: &[EnumValue] = &[
        EnumValue { value: "draft", label: "Черновик" },
        EnumValue { value: "done", label: "Выполнен" },
    ];

    #[test]
    fn test_builder_flags() {
        let f = FieldMetadata::text("number", "Номер")
            .required()
            .listed()
            .searchable();
        assert!(f.is_required());
        assert!(f.visible_in_list());
        assert!(f.visible_in_form());
        assert!(f.ui.searchable);
        assert_eq!(f.section, FieldSection::Identification);
    }

    #[test]
    fn test_timestamp_is_read_only_audit() {
        let f = FieldMetadata::timestamp("created_at", "Создан");
        assert!(!f.visible_in_form());
        assert_eq!(f.section, FieldSection::Audit);
    }

    #[test]
    fn test_enum_label() {
        let f = FieldMetadata::enumeration("status", "Статус", STATUS);
        assert_eq!(f.enum_label("done"), Some("Выполнен"));
        assert_eq!(f.enum_label("unknown"), None);
        assert_eq!(FieldMetadata::text("x", "X").enum_label("done"), None);
    }

    #[test]
    fn test_item_path() {
        let info = EntityMetadataInfo {
            entity_type: EntityType::Aggregate,
            entity_name: "purchase_order",
            entity_index: "a001",
            collection_name: "/purchases/purchase-orders/",
            ui: EntityUiMetadata {
                element_name: "Заказ",
                list_name: "Заказы",
                icon: None,
            },
        };
        assert_eq!(info.item_path(7), "/purchases/purchase-orders/7/");
        assert_eq!(info.full_name(), "a001_purchase_order");
    }
}
