use crate::core::data::point::PointerPosition;
use crate::core::view::gesture::ButtonState;

/// Input sampled once per frame from the windowing layer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub pointer: PointerPosition,
    pub buttons: ButtonState,
}
