use crate::core::actions::generate_escape_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates every pixel on the calling thread, row-major.
pub fn generate_escape_grid_serial<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Output> {
    let viewport = algorithm.viewport();

    (0..viewport.height())
        .flat_map(|y| (0..viewport.width()).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::viewport::Viewport;

    struct CoordinateSum {
        viewport: Viewport,
    }

    impl FractalAlgorithm for CoordinateSum {
        type Output = u32;

        fn compute(&self, pixel: Point) -> Self::Output {
            pixel.x + 10 * pixel.y
        }

        fn viewport(&self) -> Viewport {
            self.viewport
        }
    }

    #[test]
    fn test_visits_pixels_row_major() {
        let algorithm = CoordinateSum {
            viewport: Viewport::new(3, 2),
        };

        assert_eq!(
            generate_escape_grid_serial(&algorithm),
            vec![0, 1, 2, 10, 11, 12]
        );
    }

    #[test]
    fn test_empty_viewport_yields_empty_grid() {
        let algorithm = CoordinateSum {
            viewport: Viewport::new(0, 5),
        };

        assert!(generate_escape_grid_serial(&algorithm).is_empty());
    }
}
