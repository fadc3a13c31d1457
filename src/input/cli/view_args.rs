use clap::{Args, ValueEnum};

use crate::core::config::render_config::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_WIDTH, RenderConfig,
};
use crate::core::data::complex::Complex;
use crate::core::data::view_state::{DEFAULT_CENTER, DEFAULT_SCALE};
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;
use crate::core::view::view_controller::{DEFAULT_ZOOM_IN_FACTOR, DEFAULT_ZOOM_OUT_FACTOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColourMapArg {
    #[default]
    HueCycle,
    FireGradient,
}

impl From<ColourMapArg> for MandelbrotColourMapKind {
    fn from(arg: ColourMapArg) -> Self {
        match arg {
            ColourMapArg::HueCycle => Self::HueCycle,
            ColourMapArg::FireGradient => Self::FireGradient,
        }
    }
}

/// View and render options shared by every front end.
#[derive(Debug, Clone, Args)]
pub struct ViewArgs {
    /// Output width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Output height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Real part of the initial view center
    #[arg(long, default_value_t = DEFAULT_CENTER.real, allow_hyphen_values = true)]
    pub center_re: f64,

    /// Imaginary part of the initial view center
    #[arg(long, default_value_t = DEFAULT_CENTER.imag, allow_hyphen_values = true)]
    pub center_im: f64,

    /// Half-width of the visible square of the plane
    #[arg(long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Iteration bound per point
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    #[arg(long, default_value_t = DEFAULT_ZOOM_IN_FACTOR)]
    pub zoom_in_factor: f64,

    #[arg(long, default_value_t = DEFAULT_ZOOM_OUT_FACTOR)]
    pub zoom_out_factor: f64,

    #[arg(long, value_enum, default_value_t = ColourMapArg::HueCycle)]
    pub colour_map: ColourMapArg,
}

impl ViewArgs {
    #[must_use]
    pub fn to_render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            center: Complex::new(self.center_re, self.center_im),
            scale: self.scale,
            max_iterations: self.max_iterations,
            zoom_in_factor: self.zoom_in_factor,
            zoom_out_factor: self.zoom_out_factor,
            colour_map_kind: self.colour_map.into(),
        }
    }
}
