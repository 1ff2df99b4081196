pub mod aggregate;
pub mod metadata;

pub use aggregate::RequisitionLine;
