/// A pixel coordinate on the render grid, `(0, 0)` at the top-left.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Pointer position in window pixel space. Sub-pixel precision is kept because
/// windowing systems report cursor positions as floats.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}
