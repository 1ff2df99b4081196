pub mod resource;
pub mod ui;
