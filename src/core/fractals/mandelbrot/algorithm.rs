use crate::core::actions::generate_escape_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::escape_result::EscapeResult;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::mapping::view_mapper::ViewMapper;

/// Squared escape radius; orbits with `|z|² > 4` (i.e. `|z| > 2`) diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterates `z ← z² + c` starting from `z₀ = c`.
///
/// Returns the first iteration (counting from 1) at which `|z|²` strictly
/// exceeds [`ESCAPE_RADIUS_SQUARED`], or a bounded result carrying
/// `max_iterations` when the orbit stays inside. `c` itself is never tested,
/// only the iterates. `max_iterations` is validated by the caller; with a
/// value of 1 no iteration runs and every point is bounded.
#[inline]
#[must_use]
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn escape_time(c: Complex, max_iterations: u32) -> EscapeResult {
    let mut z = c;
    let mut iteration = 1;

    while iteration < max_iterations {
        z = z * z + c;

        // negated so a NaN magnitude (inf - inf on overflow) counts as escaped
        if !(z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED) {
            return EscapeResult::escaped(iteration);
        }

        iteration += 1;
    }

    EscapeResult::bounded(max_iterations)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    mapper: ViewMapper,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Output = EscapeResult;

    #[inline]
    fn compute(&self, pixel: Point) -> Self::Output {
        let c = self
            .mapper
            .pixel_to_plane(f64::from(pixel.x), f64::from(pixel.y));

        escape_time(c, self.max_iterations)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl MandelbrotAlgorithm {
    pub fn new(
        viewport: Viewport,
        mapper: ViewMapper,
        max_iterations: u32,
    ) -> Result<Self, MandelbrotError> {
        if max_iterations == 0 {
            return Err(MandelbrotError::InvalidIterationBound { max_iterations });
        }

        Ok(Self {
            viewport,
            mapper,
            max_iterations,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
