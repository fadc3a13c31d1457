use std::io;
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Persists a finished frame. Implementations choose the image format.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> io::Result<()>;
}
