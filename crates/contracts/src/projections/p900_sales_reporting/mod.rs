pub mod dto;
pub mod metadata;

pub use dto::SalesReportRow;
