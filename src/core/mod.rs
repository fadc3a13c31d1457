pub mod actions;
pub mod config;
pub mod data;
pub mod fractals;
pub mod mapping;
pub mod util;
pub mod view;
