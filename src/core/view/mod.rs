pub mod gesture;
pub mod view_controller;
