pub mod default_switch;
pub mod resource;
pub mod ui;
