#[cfg(feature = "gui")]
mod adapters;
mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::cli::cli_controller::{CliController, GestureScript};
pub use crate::controllers::interactive::InteractiveController;
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::data::frame_input::FrameInput;
pub use crate::core::actions::render_frame::render_frame::{FrameSummary, RenderError, render_frame};
pub use crate::core::config::render_config::{ConfigError, RenderConfig, ValidatedConfig};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::PointerPosition;
pub use crate::core::data::view_state::ViewState;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::fractals::mandelbrot::algorithm::escape_time;
pub use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;
pub use crate::core::fractals::mandelbrot::colour_maps::factory::mandelbrot_colour_map_factory;
pub use crate::core::fractals::mandelbrot::colour_maps::hue_cycle::MandelbrotHueCycle;
pub use crate::core::view::gesture::ButtonState;
pub use crate::input::cli::view_args::ViewArgs;
pub use crate::presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use crate::input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use crate::presenters::pixels::factory::PixelsPresenterFactory;
