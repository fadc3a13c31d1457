use rayon::prelude::*;

use crate::core::actions::generate_escape_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Evaluates every pixel in parallel using rayon's work-stealing scheduler.
///
/// Per-pixel cost varies wildly (interior points run to the iteration limit),
/// so work stealing balances the load; no task is smaller than one row. The
/// iterator is indexed, so results are written straight into the row-major
/// output, identical to
/// [`generate_escape_grid_serial`](super::generate_escape_grid_serial::generate_escape_grid_serial).
pub fn generate_escape_grid_parallel<Alg>(algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
{
    let viewport = algorithm.viewport();
    let row_width = viewport.width() as usize;

    (0..viewport.pixel_count())
        .into_par_iter()
        .with_min_len(row_width.max(1))
        .map(|index| {
            algorithm.compute(Point {
                x: (index % row_width) as u32,
                y: (index / row_width) as u32,
            })
        })
        .collect()
}
