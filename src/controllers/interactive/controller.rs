use log::{debug, warn};
use std::time::Instant;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::frame_input::FrameInput;
use crate::controllers::interactive::events::render_event::{RenderEvent, RenderFailure};
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_frame::render_frame::{RenderError, render_frame};
use crate::core::config::render_config::{ConfigError, ValidatedConfig, validate_max_iterations};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_map::{MandelbrotColourMap, MandelbrotColourMapKind};
use crate::core::fractals::mandelbrot::colour_maps::factory::mandelbrot_colour_map_factory;
use crate::core::view::view_controller::ViewController;

/// Owns all mutable session state: the view, the viewport and the output
/// buffer.
///
/// [`InteractiveController::frame`] is the only place the view changes, and it
/// always updates the view before rendering, so a render pass never observes a
/// view that is mid-update.
pub struct InteractiveController {
    viewport: Viewport,
    view_controller: ViewController,
    max_iterations: u32,
    colour_map: Box<dyn MandelbrotColourMap>,
    pixel_buffer: PixelBuffer,
    generation: u64,
}

impl InteractiveController {
    #[must_use]
    pub fn new(config: ValidatedConfig) -> Self {
        Self {
            viewport: config.viewport,
            view_controller: ViewController::new(config.view, config.zoom_factors),
            max_iterations: config.max_iterations,
            colour_map: mandelbrot_colour_map_factory(config.colour_map_kind),
            pixel_buffer: PixelBuffer::new(config.viewport),
            generation: 0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view_controller.view()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> MandelbrotColourMapKind {
        self.colour_map.kind()
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.pixel_buffer
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);

        if viewport == self.viewport {
            return;
        }

        debug!("viewport resized to {}x{}", width, height);
        self.viewport = viewport;
        self.pixel_buffer.resize(viewport);
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), ConfigError> {
        self.max_iterations = validate_max_iterations(max_iterations)?;

        Ok(())
    }

    pub fn set_colour_map_kind(&mut self, kind: MandelbrotColourMapKind) {
        if kind != self.colour_map.kind() {
            self.colour_map = mandelbrot_colour_map_factory(kind);
        }
    }

    pub fn reset_view(&mut self) {
        self.view_controller.reset();
    }

    /// Applies `input` to the view, then renders the full viewport.
    pub fn frame(&mut self, input: FrameInput) -> Result<FrameData, RenderError> {
        self.generation += 1;

        let view = self
            .view_controller
            .update(input.pointer, self.viewport, input.buttons);

        let start = Instant::now();
        let summary = render_frame(
            self.viewport,
            view,
            self.max_iterations,
            self.colour_map.as_ref(),
            &mut self.pixel_buffer,
        )?;
        let render_duration = start.elapsed();

        debug!(
            "frame {} rendered in {:?}: center ({:.6}, {:.6}) scale {:e}",
            self.generation,
            render_duration,
            view.center().real,
            view.center().imag,
            view.scale()
        );

        Ok(FrameData {
            generation: self.generation,
            view,
            max_iterations: self.max_iterations,
            summary,
            render_duration,
        })
    }

    /// Runs [`InteractiveController::frame`] and hands the outcome to `presenter`.
    /// A failed frame is reported to the presenter and logged, never propagated.
    pub fn frame_and_present<P>(&mut self, input: FrameInput, presenter: &mut P)
    where
        P: InteractiveControllerPresenterPort + ?Sized,
    {
        match self.frame(input) {
            Ok(frame) => presenter.present(RenderEvent::Frame {
                frame,
                pixel_buffer: &self.pixel_buffer,
            }),
            Err(err) => {
                warn!("frame {} failed: {}", self.generation, err);
                presenter.present(RenderEvent::Error(RenderFailure {
                    generation: self.generation,
                    message: err.to_string(),
                }));
            }
        }
    }
}
