//! Frame loop for interactive fractal exploration.
//!
//! Each frame applies the pointer gesture to the view, then renders the whole
//! viewport from that view and hands the buffer to a presenter.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `FrameInput` sampled by the windowing adapter every frame
//! - **Output**: `InteractiveControllerPresenterPort` receiving rendered frames
//! - **Core**: Uses domain actions from `core/` for actual computation

mod controller;
pub mod data;
pub mod events;
pub mod ports;

pub use controller::InteractiveController;
