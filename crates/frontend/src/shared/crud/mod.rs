//! Generic list/form/detail machinery shared by every resource page.

pub mod api;
pub mod display;
pub mod filter;
pub mod form;
pub mod pagination;
pub mod references;
pub mod resource;
pub mod row;
pub mod state;
pub mod ui;

pub use filter::{FilterKind, FilterSpec, FilterValue, TabSpec};
pub use resource::{Capabilities, Resource};
pub use row::Row;
