use crate::core::fractals::mandelbrot::{
    colour_map::{MandelbrotColourMap, MandelbrotColourMapKind},
    colour_maps::{fire_gradient::MandelbrotFireGradient, hue_cycle::MandelbrotHueCycle},
};

#[must_use]
pub fn mandelbrot_colour_map_factory(kind: MandelbrotColourMapKind) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKind::HueCycle => Box::new(MandelbrotHueCycle::new()),
        MandelbrotColourMapKind::FireGradient => Box::new(MandelbrotFireGradient::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_frame::ports::colour_map::ColourMap;
    use crate::core::data::escape_result::EscapeResult;
    use crate::core::fractals::mandelbrot::colour_maps::hue_cycle::{INTERIOR_COLOUR, colour_for};

    #[test]
    fn test_every_kind_builds_a_map_reporting_that_kind() {
        for &kind in MandelbrotColourMapKind::ALL {
            let map = mandelbrot_colour_map_factory(kind);

            assert_eq!(map.kind(), kind);
            assert_eq!(map.display_name(), kind.display_name());
        }
    }

    #[test]
    fn test_default_kind_is_the_hue_cycle() {
        let map = mandelbrot_colour_map_factory(MandelbrotColourMapKind::default());

        for iterations in [1, 17, 50, 99] {
            let result = EscapeResult::escaped(iterations);
            assert_eq!(map.map(result, 100), colour_for(result, 100));
        }
    }

    #[test]
    fn test_every_kind_paints_interior_points_black() {
        for &kind in MandelbrotColourMapKind::ALL {
            let map = mandelbrot_colour_map_factory(kind);

            assert_eq!(map.map(EscapeResult::bounded(100), 100), INTERIOR_COLOUR);
        }
    }

    #[test]
    fn test_colour_follows_the_bound_passed_to_map() {
        let map = mandelbrot_colour_map_factory(MandelbrotColourMapKind::HueCycle);
        let result = EscapeResult::escaped(5);

        assert_ne!(map.map(result, 10), map.map(result, 1000));
    }
}
