use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Per-pixel computation over a viewport. Implementations must be pure so the
/// pixel loop can run in any order.
pub trait FractalAlgorithm {
    type Output;

    fn compute(&self, pixel: Point) -> Self::Output;

    fn viewport(&self) -> Viewport;
}
