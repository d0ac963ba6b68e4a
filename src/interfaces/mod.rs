pub mod components;
pub mod design_system;
pub mod ui;
