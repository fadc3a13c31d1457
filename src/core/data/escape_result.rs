/// Outcome of iterating a single point.
///
/// `escaped == false` always comes with `iterations == max_iterations`; the
/// point is treated as a member of the set.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EscapeResult {
    pub iterations: u32,
    pub escaped: bool,
}

impl EscapeResult {
    #[must_use]
    pub const fn escaped(iterations: u32) -> Self {
        Self {
            iterations,
            escaped: true,
        }
    }

    #[must_use]
    pub const fn bounded(max_iterations: u32) -> Self {
        Self {
            iterations: max_iterations,
            escaped: false,
        }
    }

    #[must_use]
    pub fn is_interior(&self) -> bool {
        !self.escaped
    }
}
