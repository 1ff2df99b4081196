//! Metadata types for describing aggregates and projections
//!
//! This module provides compile-time metadata for all entities in the system.
//! All types use 'static lifetimes for zero-cost access to compile-time constants.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use contracts::domain::common::Entity;
//!
//! let meta = PurchaseOrder::entity_metadata_info();
//! println!("Entity: {}", meta.ui.list_name);
//!
//! for field in PurchaseOrder::field_metadata() {
//!     println!("{}: {}", field.name, field.ui.label);
//! }
//! ```

mod field_type;
pub mod references;
mod types;
mod validation;

pub use field_type::{FieldSection, FieldType};
pub use types::{
    EntityMetadataInfo, EntityType, EntityUiMetadata, EnumValue, FieldMetadata,
    FieldUiMetadata, ReferenceMetadata,
};
pub use validation::ValidationRules;
