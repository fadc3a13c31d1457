//! Windowed front end for interactive exploration.
//!
//! Uses winit for the window and input events, pixels for the framebuffer and
//! egui for the overlay controls.

pub mod app;
pub mod commands;
pub mod ui_state;
