//! Common types and traits for all backend-owned records

pub mod aggregate_root;

pub use aggregate_root::{Entity, RecordId};
