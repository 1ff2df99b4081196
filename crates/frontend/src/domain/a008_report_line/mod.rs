pub mod resource;
pub mod tree;
pub mod ui;
