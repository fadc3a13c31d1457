use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_map::{MandelbrotColourMap, MandelbrotColourMapKind};

/// Black → red → orange → yellow → white over the escape range.
#[derive(Debug, Default)]
pub struct MandelbrotFireGradient {}

impl ColourMap<EscapeResult> for MandelbrotFireGradient {
    fn map(&self, result: EscapeResult, max_iterations: u32) -> Colour {
        if !result.escaped {
            return Colour::BLACK;
        }

        let t = (f64::from(result.iterations) / f64::from(max_iterations.max(1))).min(1.0);

        let (r, g, b) = if t < 0.25 {
            let local_t = t / 0.25;
            ((local_t * 255.0) as u8, 0, 0)
        } else if t < 0.5 {
            let local_t = (t - 0.25) / 0.25;
            (255, (local_t * 165.0) as u8, 0)
        } else if t < 0.75 {
            let local_t = (t - 0.5) / 0.25;
            (255, (165.0 + local_t * 90.0) as u8, 0)
        } else {
            let local_t = (t - 0.75) / 0.25;
            (255, 255, (local_t * 255.0) as u8)
        };

        Colour { r, g, b }
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFireGradient {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::FireGradient
    }
}

impl MandelbrotFireGradient {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_black() {
        let mapper = MandelbrotFireGradient::new();

        assert_eq!(mapper.map(EscapeResult::bounded(100), 100), Colour::BLACK);
    }

    #[test]
    fn test_quarter_is_red() {
        let mapper = MandelbrotFireGradient::new();

        assert_eq!(
            mapper.map(EscapeResult::escaped(25), 100),
            Colour { r: 255, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_half_is_orange() {
        let mapper = MandelbrotFireGradient::new();

        assert_eq!(
            mapper.map(EscapeResult::escaped(50), 100),
            Colour { r: 255, g: 165, b: 0 }
        );
    }

    #[test]
    fn test_three_quarters_is_yellow() {
        let mapper = MandelbrotFireGradient::new();

        assert_eq!(
            mapper.map(EscapeResult::escaped(75), 100),
            Colour { r: 255, g: 255, b: 0 }
        );
    }

    #[test]
    fn test_near_max_is_near_white() {
        let colour = MandelbrotFireGradient::new().map(EscapeResult::escaped(99), 100);

        assert_eq!(colour.r, 255);
        assert_eq!(colour.g, 255);
        assert!(colour.b > 240);
    }
}
