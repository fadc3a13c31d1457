/// Pixel dimensions of the render target.
///
/// The sampled plane region is always square. On a non-square viewport the
/// square of side [`Viewport::square_extent`] is centred inside the pixel
/// area, and [`Viewport::offset`] gives the top-left corner of that square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// Zero-sized viewports are representable (a minimised window reports
    /// one); mapping through them fails with a degenerate-viewport error.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn square_extent(&self) -> u32 {
        self.width.min(self.height)
    }

    #[must_use]
    pub fn offset(&self) -> (f64, f64) {
        let width = f64::from(self.width);
        let height = f64::from(self.height);

        if self.width > self.height {
            (0.5 * (width - height), 0.0)
        } else {
            (0.0, 0.5 * (height - width))
        }
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.square_extent() == 0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
