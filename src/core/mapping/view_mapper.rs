use crate::core::data::complex::Complex;
use crate::core::data::point::PointerPosition;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::util::map_range::map_range;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ViewMapError {
    DegenerateViewport { width: u32, height: u32 },
}

impl fmt::Display for ViewMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateViewport { width, height } => {
                write!(f, "viewport has no square extent: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewMapError {}

/// Affine mapping between viewport pixels and the complex plane for one
/// `(viewport, view)` pair.
///
/// The square `[offset, offset + square_extent]` of pixel space maps onto
/// `[center - scale, center + scale]` on both axes. Pixels outside the square
/// (the letterbox on a non-square viewport) extrapolate along the same line.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewMapper {
    square_extent: f64,
    offset_x: f64,
    offset_y: f64,
    top_left: Complex,
    bottom_right: Complex,
}

impl ViewMapper {
    pub fn new(viewport: Viewport, view: ViewState) -> Result<Self, ViewMapError> {
        if viewport.is_degenerate() {
            return Err(ViewMapError::DegenerateViewport {
                width: viewport.width(),
                height: viewport.height(),
            });
        }

        let (offset_x, offset_y) = viewport.offset();

        Ok(Self {
            square_extent: f64::from(viewport.square_extent()),
            offset_x,
            offset_y,
            top_left: view.top_left(),
            bottom_right: view.bottom_right(),
        })
    }

    #[inline]
    #[must_use]
    pub fn pixel_to_plane(&self, x: f64, y: f64) -> Complex {
        Complex {
            real: map_range(
                x - self.offset_x,
                0.0,
                self.square_extent,
                self.top_left.real,
                self.bottom_right.real,
            ),
            imag: map_range(
                y - self.offset_y,
                0.0,
                self.square_extent,
                self.top_left.imag,
                self.bottom_right.imag,
            ),
        }
    }

    #[must_use]
    pub fn pointer_to_plane(&self, pointer: PointerPosition) -> Complex {
        self.pixel_to_plane(pointer.x, pointer.y)
    }

    #[must_use]
    pub fn plane_to_pixel(&self, point: Complex) -> (f64, f64) {
        let x = map_range(
            point.real,
            self.top_left.real,
            self.bottom_right.real,
            0.0,
            self.square_extent,
        );
        let y = map_range(
            point.imag,
            self.top_left.imag,
            self.bottom_right.imag,
            0.0,
            self.square_extent,
        );

        (x + self.offset_x, y + self.offset_y)
    }
}

pub fn pixel_to_plane(
    x: f64,
    y: f64,
    viewport: Viewport,
    view: ViewState,
) -> Result<Complex, ViewMapError> {
    Ok(ViewMapper::new(viewport, view)?.pixel_to_plane(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn view(real: f64, imag: f64, scale: f64) -> ViewState {
        ViewState::new(Complex::new(real, imag), scale).unwrap()
    }

    fn assert_close(actual: Complex, expected: Complex) {
        assert!(
            (actual.real - expected.real).abs() < TOLERANCE
                && (actual.imag - expected.imag).abs() < TOLERANCE,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_square_viewport_corners() {
        let mapper = ViewMapper::new(Viewport::new(100, 100), view(0.0, 0.0, 2.0)).unwrap();

        assert_close(mapper.pixel_to_plane(0.0, 0.0), Complex::new(-2.0, -2.0));
        assert_close(mapper.pixel_to_plane(100.0, 100.0), Complex::new(2.0, 2.0));
        assert_close(mapper.pixel_to_plane(50.0, 50.0), Complex::new(0.0, 0.0));
    }

    #[test]
    fn test_wide_viewport_is_not_stretched() {
        // 600x400: square is 400 wide, shifted right by 100
        let mapper = ViewMapper::new(Viewport::new(600, 400), view(-0.3, 0.0, 1.0)).unwrap();

        assert_close(mapper.pixel_to_plane(300.0, 200.0), Complex::new(-0.3, 0.0));
        assert_close(mapper.pixel_to_plane(100.0, 0.0), Complex::new(-1.3, -1.0));

        // one pixel step has the same plane length on both axes
        let origin = mapper.pixel_to_plane(0.0, 0.0);
        let dx = mapper.pixel_to_plane(1.0, 0.0).real - origin.real;
        let dy = mapper.pixel_to_plane(0.0, 1.0).imag - origin.imag;
        assert!((dx - dy).abs() < TOLERANCE);
    }

    #[test]
    fn test_tall_viewport_is_centred_vertically() {
        let mapper = ViewMapper::new(Viewport::new(300, 500), view(0.0, 0.0, 1.0)).unwrap();

        assert_close(mapper.pixel_to_plane(0.0, 100.0), Complex::new(-1.0, -1.0));
        assert_close(mapper.pixel_to_plane(300.0, 400.0), Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_letterbox_pixels_extrapolate() {
        let mapper = ViewMapper::new(Viewport::new(600, 400), view(0.0, 0.0, 1.0)).unwrap();

        assert!(mapper.pixel_to_plane(0.0, 200.0).real < -1.0);
        assert!(mapper.pixel_to_plane(600.0, 200.0).real > 1.0);
    }

    #[test]
    fn test_mapping_is_deterministic() {
        let viewport = Viewport::new(640, 480);
        let view = view(-0.75, 0.1, 0.37);

        let a = pixel_to_plane(123.0, 321.0, viewport, view).unwrap();
        let b = pixel_to_plane(123.0, 321.0, viewport, view).unwrap();

        assert_eq!(a.real.to_bits(), b.real.to_bits());
        assert_eq!(a.imag.to_bits(), b.imag.to_bits());
    }

    #[test]
    fn test_plane_to_pixel_round_trips() {
        let mapper = ViewMapper::new(Viewport::new(640, 480), view(-0.75, 0.1, 0.37)).unwrap();

        for &(x, y) in &[(0.0, 0.0), (639.0, 479.0), (320.0, 240.0), (17.0, 401.0)] {
            let (px, py) = mapper.plane_to_pixel(mapper.pixel_to_plane(x, y));

            assert!((px - x).abs() < TOLERANCE, "x: {} -> {}", x, px);
            assert!((py - y).abs() < TOLERANCE, "y: {} -> {}", y, py);
        }
    }

    #[test]
    fn test_pointer_maps_like_pixel() {
        let mapper = ViewMapper::new(Viewport::new(200, 100), view(0.0, 0.0, 1.0)).unwrap();
        let pointer = PointerPosition { x: 75.5, y: 20.25 };

        assert_eq!(mapper.pointer_to_plane(pointer), mapper.pixel_to_plane(75.5, 20.25));
    }

    #[test]
    fn test_degenerate_viewport_fails() {
        let result = pixel_to_plane(0.0, 0.0, Viewport::new(0, 480), view(0.0, 0.0, 1.0));

        assert_eq!(
            result,
            Err(ViewMapError::DegenerateViewport {
                width: 0,
                height: 480
            })
        );
    }
}
