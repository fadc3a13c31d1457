use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, info, warn};
use winit::{
    error::EventLoopError,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::Window,
};

use crate::controllers::interactive::InteractiveController;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;
use crate::input::gui::app::pointer_input::PointerInputState;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::ui_state::{MAX_ITERATIONS_SLIDER_LIMIT, UiState};

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    width: u32,
    height: u32,
    presenter: T,
    controller: InteractiveController,
    pointer: PointerInputState,
    ui_state: UiState,
    ui_error_message: Option<String>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        mut controller: InteractiveController,
    ) -> Self {
        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None,
        );

        controller.resize(size.width, size.height);
        let ui_state = UiState::from_controller(&controller);

        Self {
            window,
            width: size.width,
            height: size.height,
            presenter,
            controller,
            pointer: PointerInputState::default(),
            ui_state,
            ui_error_message: None,
            egui_ctx,
            egui_state,
        }
    }

    /// Runs until the window is closed. Every redraw renders a fresh frame, so
    /// a held button keeps zooming without further input events.
    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<(), EventLoopError> {
        let window = self.window;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let egui_consumed = self.handle_window_event(event);

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        if let Err(err) = self.redraw() {
                            error!("render error: {}", err);
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = self.resize(size.width, size.height) {
                            error!("resize error: {}", err);
                            elwt.exit();
                        }
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        let size = window.inner_size();
                        if let Err(err) = self.resize(size.width, size.height) {
                            error!("resize error: {}", err);
                            elwt.exit();
                        }
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        self.pointer.handle_cursor_moved(position.x, position.y);
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        self.pointer.handle_mouse_input(*button, *state);
                    }
                    WindowEvent::CursorLeft { .. } | WindowEvent::Focused(false) => {
                        self.pointer.release_buttons();
                    }
                    WindowEvent::KeyboardInput { event, .. } if !egui_consumed => {
                        if self.handle_key(event) {
                            elwt.exit();
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => window.request_redraw(),
            _ => {}
        })
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(self.window, event).consumed
    }

    /// Returns true when the key asks the app to quit.
    fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed {
            return false;
        }

        match &event.logical_key {
            Key::Named(NamedKey::Escape) => true,
            Key::Character(ch) if ch.as_str().eq_ignore_ascii_case("r") => {
                info!("view reset");
                self.ui_state.reset_requested = true;
                false
            }
            _ => false,
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.controller.resize(width, height);
        self.presenter.resize(width, height)
    }

    fn redraw(&mut self) -> Result<(), pixels::Error> {
        let mut egui_output = self.update_ui();
        let platform_output = std::mem::take(&mut egui_output.platform_output);
        self.egui_state
            .handle_platform_output(self.window, platform_output);

        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        match self.ui_state.apply(&mut self.controller) {
            Ok(()) => self.ui_error_message = None,
            Err(err) => {
                warn!("rejected setting: {}", err);
                self.ui_error_message = Some(err.to_string());
            }
        }

        let captured =
            self.egui_ctx.wants_pointer_input() || self.egui_ctx.is_pointer_over_area();
        let input = self.pointer.snapshot(captured);
        self.controller.frame_and_present(input, &mut self.presenter);

        self.presenter.render(egui_output, &self.egui_ctx)
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);
        let last_frame = self.presenter.last_frame();
        let last_error = self
            .ui_error_message
            .clone()
            .or_else(|| self.presenter.last_error().map(str::to_owned));
        let ui_state = &mut self.ui_state;
        let (width, height) = (self.width, self.height);

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 220.0])
                .show(ctx, |ui| {
                    ui.label("Left button: zoom in. Right button: zoom out. R: reset.");
                    ui.separator();

                    ui.horizontal(|ui| {
                        ui.label("Max iterations:");
                        ui.add(
                            egui::Slider::new(
                                &mut ui_state.max_iterations,
                                1..=MAX_ITERATIONS_SLIDER_LIMIT,
                            )
                            .logarithmic(true),
                        );
                    });

                    ui.horizontal(|ui| {
                        ui.label("Colour map:");
                        egui::ComboBox::from_id_source("mandelbrot_colour_map")
                            .selected_text(ui_state.colour_map_kind.display_name())
                            .show_ui(ui, |ui| {
                                for &kind in MandelbrotColourMapKind::ALL {
                                    ui.selectable_value(
                                        &mut ui_state.colour_map_kind,
                                        kind,
                                        kind.display_name(),
                                    );
                                }
                            });
                    });

                    if ui.button("Reset view").clicked() {
                        ui_state.reset_requested = true;
                    }

                    ui.separator();
                    ui.label(format!("Window size: {}x{}", width, height));

                    if let Some(frame) = last_frame {
                        let center = frame.view.center();
                        ui.label(format!("Center: {:.12} {:+.12}i", center.real, center.imag));
                        ui.label(format!("Scale: {:.6e}", frame.view.scale()));
                        ui.label(format!("Frame: {}", frame.generation));
                        ui.label(format!(
                            "Interior pixels: {}",
                            frame.summary.interior_pixels
                        ));
                        ui.label(format!(
                            "Last render: {} ms",
                            frame.render_duration.as_millis()
                        ));
                    }

                    if let Some(message) = &last_error {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }
}
