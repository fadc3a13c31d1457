use rayon::prelude::*;
use std::error::Error;
use std::fmt;

use crate::core::actions::generate_escape_grid::generate_escape_grid_parallel::generate_escape_grid_parallel;
use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer};
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::mapping::view_mapper::{ViewMapError, ViewMapper};

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    ViewMap(ViewMapError),
    Mandelbrot(MandelbrotError),
    BufferMismatch { viewport: Viewport, buffer: Viewport },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ViewMap(err) => write!(f, "view mapping error: {}", err),
            Self::Mandelbrot(err) => write!(f, "mandelbrot error: {}", err),
            Self::BufferMismatch { viewport, buffer } => write!(
                f,
                "output buffer is {}x{} but viewport is {}x{}",
                buffer.width(),
                buffer.height(),
                viewport.width(),
                viewport.height()
            ),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ViewMap(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
            Self::BufferMismatch { .. } => None,
        }
    }
}

impl From<ViewMapError> for RenderError {
    fn from(err: ViewMapError) -> Self {
        Self::ViewMap(err)
    }
}

impl From<MandelbrotError> for RenderError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct FrameSummary {
    pub interior_pixels: usize,
    pub escaped_pixels: usize,
}

/// Renders one frame of the set into `buffer`.
///
/// Every pixel is mapped to the plane, iterated, coloured and written; the
/// previous contents of `buffer` are never read. `view` is only borrowed for
/// the duration of the pass, so callers apply any view update first and render
/// second.
pub fn render_frame<CMap>(
    viewport: Viewport,
    view: ViewState,
    max_iterations: u32,
    colour_map: &CMap,
    buffer: &mut PixelBuffer,
) -> Result<FrameSummary, RenderError>
where
    CMap: ColourMap<EscapeResult> + Sync + ?Sized,
{
    let mapper = ViewMapper::new(viewport, view)?;
    let algorithm = MandelbrotAlgorithm::new(viewport, mapper, max_iterations)?;

    if buffer.viewport() != viewport {
        return Err(RenderError::BufferMismatch {
            viewport,
            buffer: buffer.viewport(),
        });
    }

    let escapes = generate_escape_grid_parallel(&algorithm);

    buffer
        .data_mut()
        .par_chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(escapes.par_iter())
        .for_each(|(pixel, &result)| {
            pixel.copy_from_slice(&colour_map.map(result, max_iterations).to_bytes());
        });

    let interior_pixels = escapes.iter().filter(|result| result.is_interior()).count();

    Ok(FrameSummary {
        interior_pixels,
        escaped_pixels: escapes.len() - interior_pixels,
    })
}
