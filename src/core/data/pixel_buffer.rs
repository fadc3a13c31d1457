use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use std::error::Error;
use std::fmt;

pub const BYTES_PER_PIXEL: usize = 3;

fn viewport_to_buffer_size(viewport: Viewport) -> usize {
    viewport.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        viewport: Viewport,
    },
    BoundsMismatch {
        viewport_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                viewport_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "viewport size {} does not match buffer size {}",
                    viewport_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, viewport } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of viewport {}x{}",
                    pixel.x,
                    pixel.y,
                    viewport.width(),
                    viewport.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGB framebuffer, one [`Colour`] per viewport pixel.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    viewport: Viewport,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            buffer: vec![0; viewport_to_buffer_size(viewport)],
        }
    }

    pub fn from_data(viewport: Viewport, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let viewport_size = viewport_to_buffer_size(viewport);

        if viewport_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                viewport_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { viewport, buffer })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    /// Reallocates the buffer for a new viewport. Contents are zeroed.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.buffer.clear();
        self.buffer.resize(viewport_to_buffer_size(viewport), 0);
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        let index = self.index_of(pixel)?;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                viewport: self.viewport,
            })?;

        self.buffer[index..index + BYTES_PER_PIXEL].copy_from_slice(&colour.to_bytes());

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if pixel.x >= self.viewport.width() || pixel.y >= self.viewport.height() {
            return None;
        }

        let row = pixel.y as usize * self.viewport.width() as usize;
        Some((row + pixel.x as usize) * BYTES_PER_PIXEL)
    }
}
