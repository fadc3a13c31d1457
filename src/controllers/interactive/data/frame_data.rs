use std::time::Duration;

use crate::core::actions::render_frame::render_frame::FrameSummary;
use crate::core::data::view_state::ViewState;

/// Diagnostics for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameData {
    pub generation: u64,
    pub view: ViewState,
    pub max_iterations: u32,
    pub summary: FrameSummary,
    pub render_duration: Duration,
}
