use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `buffer` as a binary (P6) PPM image.
pub fn encode_ppm<W: Write>(buffer: &PixelBuffer, writer: &mut W) -> std::io::Result<()> {
    let viewport = buffer.viewport();

    // P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", viewport.width(), viewport.height())?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;

    Ok(())
}

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(filepath)?);
        encode_ppm(buffer, &mut writer)?;
        writer.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
