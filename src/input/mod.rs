//! Input adapters for the explorer.
//!
//! Adapters here receive input from the command line or a windowing system and
//! turn it into configuration and frame inputs for the controllers.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
