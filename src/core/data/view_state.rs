use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

pub const DEFAULT_CENTER: Complex = Complex::new(-0.3, 0.0);
pub const DEFAULT_SCALE: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewStateError {
    InvalidScale { scale: f64 },
    NonFiniteCenter { center: Complex },
}

impl fmt::Display for ViewStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidScale { scale } => {
                write!(f, "view scale must be positive and finite: {}", scale)
            }
            Self::NonFiniteCenter { center } => {
                write!(
                    f,
                    "view center must be finite: ({}, {})",
                    center.real, center.imag
                )
            }
        }
    }
}

impl Error for ViewStateError {}

/// The visible square of the complex plane: half-width `scale` around `center`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    center: Complex,
    scale: f64,
}

impl ViewState {
    pub fn new(center: Complex, scale: f64) -> Result<Self, ViewStateError> {
        if !center.is_finite() {
            return Err(ViewStateError::NonFiniteCenter { center });
        }

        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ViewStateError::InvalidScale { scale });
        }

        Ok(Self { center, scale })
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.center - Complex::new(self.scale, self.scale)
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.center + Complex::new(self.scale, self.scale)
    }

    /// Zooms by `factor` keeping `anchor` fixed on screen.
    ///
    /// Returns `None` when the result would leave the valid range (scale
    /// underflowing to zero or overflowing to infinity).
    #[must_use]
    pub fn zoomed_about(&self, anchor: Complex, factor: f64) -> Option<Self> {
        Self::new(anchor.lerp(self.center, factor), self.scale * factor).ok()
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            scale: DEFAULT_SCALE,
        }
    }
}
