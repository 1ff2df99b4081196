pub mod detail_modal;
pub mod filter_bar;
pub mod form_modal;
pub mod list_page;

pub use list_page::{AlternateView, ResourceListPage, RowAction, RowActionContext};
