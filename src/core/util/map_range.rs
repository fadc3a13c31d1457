/// Maps `value` linearly from `[val_min, val_max]` onto `[mapped_min, mapped_max]`.
///
/// Callers guarantee `val_min != val_max`.
#[inline]
#[must_use]
pub fn map_range(value: f64, val_min: f64, val_max: f64, mapped_min: f64, mapped_max: f64) -> f64 {
    let scale = (mapped_max - mapped_min) / (val_max - val_min);
    mapped_min + scale * (value - val_min)
}
