use crate::core::data::colour::Colour;

/// Converts hue (degrees), saturation and value (both `[0, 1]`) to RGB.
///
/// Uses the `k = (n + h/60) mod 6` channel formulation, so hue wraps
/// continuously and `hue == 360` equals `hue == 0`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let channel = |n: f64| -> u8 {
        let k = (n + hue / 60.0).rem_euclid(6.0);
        let k = k.min(4.0 - k).clamp(0.0, 1.0);
        ((value - value * saturation * k) * 255.0) as u8
    };

    Colour {
        r: channel(5.0),
        g: channel(3.0),
        b: channel(1.0),
    }
}
