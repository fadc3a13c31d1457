use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::view_state::{DEFAULT_CENTER, DEFAULT_SCALE, ViewState, ViewStateError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;
use crate::core::view::view_controller::{
    DEFAULT_ZOOM_IN_FACTOR, DEFAULT_ZOOM_OUT_FACTOR, ZoomFactorError, ZoomFactors,
};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    InvalidIterationBound { max_iterations: u32 },
    InvalidScale { scale: f64 },
    NonFiniteCenter { center: Complex },
    InvalidZoomFactor { factor: f64 },
    DegenerateViewport { width: u32, height: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIterationBound { max_iterations } => write!(
                f,
                "max iterations must be at least 1, got {}",
                max_iterations
            ),
            Self::InvalidScale { scale } => {
                write!(f, "initial scale must be positive and finite, got {}", scale)
            }
            Self::NonFiniteCenter { center } => write!(
                f,
                "initial center must be finite, got ({}, {})",
                center.real, center.imag
            ),
            Self::InvalidZoomFactor { factor } => {
                write!(f, "zoom factor must be positive and finite, got {}", factor)
            }
            Self::DegenerateViewport { width, height } => {
                write!(f, "viewport must be at least 1x1, got {}x{}", width, height)
            }
        }
    }
}

impl Error for ConfigError {}

impl From<ViewStateError> for ConfigError {
    fn from(err: ViewStateError) -> Self {
        match err {
            ViewStateError::InvalidScale { scale } => Self::InvalidScale { scale },
            ViewStateError::NonFiniteCenter { center } => Self::NonFiniteCenter { center },
        }
    }
}

impl From<ZoomFactorError> for ConfigError {
    fn from(err: ZoomFactorError) -> Self {
        match err {
            ZoomFactorError::InvalidFactor { factor } => Self::InvalidZoomFactor { factor },
        }
    }
}

/// Startup configuration for a render session.
///
/// Plain data; [`RenderConfig::validate`] checks it once before any frame is
/// rendered so the per-pixel loop never sees an invalid bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub center: Complex,
    pub scale: f64,
    pub max_iterations: u32,
    pub zoom_in_factor: f64,
    pub zoom_out_factor: f64,
    pub colour_map_kind: MandelbrotColourMapKind,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            center: DEFAULT_CENTER,
            scale: DEFAULT_SCALE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out_factor: DEFAULT_ZOOM_OUT_FACTOR,
            colour_map_kind: MandelbrotColourMapKind::default(),
        }
    }
}

/// A [`RenderConfig`] that has passed validation, with its values lifted into
/// the core types.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedConfig {
    pub viewport: Viewport,
    pub view: ViewState,
    pub max_iterations: u32,
    pub zoom_factors: ZoomFactors,
    pub colour_map_kind: MandelbrotColourMapKind,
}

impl RenderConfig {
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        validate_max_iterations(self.max_iterations)?;

        let viewport = Viewport::new(self.width, self.height);
        if viewport.is_degenerate() {
            return Err(ConfigError::DegenerateViewport {
                width: self.width,
                height: self.height,
            });
        }

        Ok(ValidatedConfig {
            viewport,
            view: ViewState::new(self.center, self.scale)?,
            max_iterations: self.max_iterations,
            zoom_factors: ZoomFactors::new(self.zoom_in_factor, self.zoom_out_factor)?,
            colour_map_kind: self.colour_map_kind,
        })
    }
}

pub fn validate_max_iterations(max_iterations: u32) -> Result<u32, ConfigError> {
    if max_iterations == 0 {
        return Err(ConfigError::InvalidIterationBound { max_iterations });
    }

    Ok(max_iterations)
}
