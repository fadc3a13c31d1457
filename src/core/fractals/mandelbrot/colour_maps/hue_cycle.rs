use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;
use crate::core::fractals::mandelbrot::colour_map::{MandelbrotColourMap, MandelbrotColourMapKind};
use crate::core::util::hsv::hsv_to_rgb;

pub const INTERIOR_COLOUR: Colour = Colour::BLACK;

/// Interior points are black; escaped points take hue `360 * iterations / max`
/// at full saturation and value.
#[must_use]
pub fn colour_for(result: EscapeResult, max_iterations: u32) -> Colour {
    if !result.escaped {
        return INTERIOR_COLOUR;
    }

    let t = f64::from(result.iterations) / f64::from(max_iterations.max(1));

    hsv_to_rgb(360.0 * t, 1.0, 1.0)
}

#[derive(Debug, Default)]
pub struct MandelbrotHueCycle {}

impl ColourMap<EscapeResult> for MandelbrotHueCycle {
    fn map(&self, result: EscapeResult, max_iterations: u32) -> Colour {
        colour_for(result, max_iterations)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotHueCycle {
    fn kind(&self) -> MandelbrotColourMapKind {
        MandelbrotColourMapKind::HueCycle
    }
}

impl MandelbrotHueCycle {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_is_black_regardless_of_limit() {
        for max_iterations in [1, 50, 100, 1000] {
            assert_eq!(
                colour_for(EscapeResult::bounded(max_iterations), max_iterations),
                INTERIOR_COLOUR
            );
        }
    }

    #[test]
    fn test_same_input_gives_same_colour() {
        let result = EscapeResult::escaped(37);

        assert_eq!(colour_for(result, 100), colour_for(result, 100));
    }

    #[test]
    fn test_third_of_limit_is_green() {
        // hue 120
        assert_eq!(
            colour_for(EscapeResult::escaped(30), 90),
            Colour { r: 0, g: 255, b: 0 }
        );
    }

    #[test]
    fn test_uses_real_division() {
        // integer division would collapse both to hue 0
        let early = colour_for(EscapeResult::escaped(10), 100);
        let late = colour_for(EscapeResult::escaped(50), 100);

        assert_ne!(early, late);
        // hue 180
        assert_eq!(late, Colour { r: 0, g: 255, b: 255 });
    }

    #[test]
    fn test_escaped_point_is_never_black() {
        for iterations in 1..100 {
            assert_ne!(colour_for(EscapeResult::escaped(iterations), 100), Colour::BLACK);
        }
    }

    #[test]
    fn test_map_delegates_to_colour_for() {
        let mapper = MandelbrotHueCycle::new();
        let result = EscapeResult::escaped(42);

        assert_eq!(mapper.map(result, 100), colour_for(result, 100));
        assert_eq!(mapper.map(result, 84), colour_for(result, 84));
        assert_eq!(mapper.display_name(), "Hue cycle");
    }
}
