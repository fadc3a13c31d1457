use crate::controllers::interactive::data::frame_data::FrameData;
use crate::core::data::pixel_buffer::PixelBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub generation: u64,
    pub message: String,
}

#[derive(Debug)]
pub enum RenderEvent<'a> {
    Frame {
        frame: FrameData,
        pixel_buffer: &'a PixelBuffer,
    },
    Error(RenderFailure),
}
