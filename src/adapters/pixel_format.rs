//! Conversion from the renderer's RGB buffer to the RGBA layout GPU surfaces use.

use std::error::Error;
use std::fmt;

use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelFormatError {
    FrameSizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for PixelFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrameSizeMismatch { expected, actual } => write!(
                f,
                "RGBA frame is {} bytes but the pixel buffer needs {}",
                actual, expected
            ),
        }
    }
}

impl Error for PixelFormatError {}

/// Writes `buffer` into `frame` as opaque RGBA. `frame` must hold exactly one
/// RGBA pixel per buffer pixel; it is left untouched otherwise.
pub fn write_rgba_frame(buffer: &PixelBuffer, frame: &mut [u8]) -> Result<(), PixelFormatError> {
    let expected = buffer.viewport().pixel_count() * RGBA_BYTES_PER_PIXEL;

    if frame.len() != expected {
        return Err(PixelFormatError::FrameSizeMismatch {
            expected,
            actual: frame.len(),
        });
    }

    for (rgb, rgba) in buffer
        .buffer()
        .chunks_exact(BYTES_PER_PIXEL)
        .zip(frame.chunks_exact_mut(RGBA_BYTES_PER_PIXEL))
    {
        rgba[..BYTES_PER_PIXEL].copy_from_slice(rgb);
        rgba[BYTES_PER_PIXEL] = u8::MAX;
    }

    Ok(())
}
