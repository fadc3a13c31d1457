//! Port definitions for the interactive controller.
//!
//! Contains trait definitions that define interfaces between the controller
//! and external systems (presentation layer, input sources, etc.).

pub mod presenter;
