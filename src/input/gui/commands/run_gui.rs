use std::error::Error;
use std::marker::PhantomData;

use log::info;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::InteractiveController;
use crate::core::config::render_config::ValidatedConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ValidatedConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ValidatedConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn Error>> {
        let event_loop = EventLoop::new()?;
        let viewport = self.config.viewport;

        // pixels needs a surface that outlives the event loop
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Explorer")
                .with_inner_size(LogicalSize::new(
                    f64::from(viewport.width()),
                    f64::from(viewport.height()),
                ))
                .with_min_inner_size(LogicalSize::new(200.0, 200.0))
                .build(&event_loop)?,
        ));

        info!(
            "opened {}x{} window",
            window.inner_size().width,
            window.inner_size().height
        );

        let presenter: P = self.presenter_factory.build(window)?;
        let controller = InteractiveController::new(self.config);
        let app = GuiApp::new(window, &event_loop, presenter, controller);

        app.run(event_loop)?;

        Ok(())
    }
}
