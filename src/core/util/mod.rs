pub mod hsv;
pub mod map_range;
