use log::info;
use std::path::Path;

use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::frame_input::FrameInput;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render_frame::render_frame::RenderError;
use crate::core::config::render_config::ValidatedConfig;
use crate::core::data::pixel_buffer::PixelBuffer;

/// A fixed pointer state held for a number of frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureScript {
    pub input: FrameInput,
    pub frames: u32,
}

/// Headless driver: replays a [`GestureScript`] through the same frame loop the
/// window uses, then writes the last frame to a file.
pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    controller: InteractiveController,
    last_frame: Option<FrameData>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P, config: ValidatedConfig) -> Self {
        Self {
            presenter,
            controller: InteractiveController::new(config),
            last_frame: None,
        }
    }

    /// Renders `script.frames` frames with the scripted input held, or a single
    /// idle frame when the script is empty.
    pub fn run(&mut self, script: GestureScript) -> Result<FrameData, RenderError> {
        let viewport = self.controller.viewport();
        info!(
            "rendering {}x{} at {} max iterations",
            viewport.width(),
            viewport.height(),
            self.controller.max_iterations()
        );

        let frame = if script.frames == 0 {
            self.controller.frame(FrameInput::default())?
        } else {
            let mut frame = self.controller.frame(script.input)?;
            for _ in 1..script.frames {
                frame = self.controller.frame(script.input)?;
            }
            frame
        };

        info!(
            "frame {} done in {:?}: center ({}, {}) scale {:e}, {} interior pixels",
            frame.generation,
            frame.render_duration,
            frame.view.center().real,
            frame.view.center().imag,
            frame.view.scale(),
            frame.summary.interior_pixels
        );

        self.last_frame = Some(frame);

        Ok(frame)
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<FrameData> {
        self.last_frame
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        self.controller.pixel_buffer()
    }

    /// Writes the most recent frame. Does nothing before the first [`CliController::run`].
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if self.last_frame.is_some() {
            let filepath = filepath.as_ref();
            self.presenter
                .present(self.controller.pixel_buffer(), filepath)?;
            info!("wrote {}", filepath.display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::render_config::RenderConfig;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::PointerPosition;
    use crate::core::view::gesture::ButtonState;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct MockFilePresenter {
        writes: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for &MockFilePresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
            self.writes
                .borrow_mut()
                .push((filepath.to_path_buf(), buffer.buffer_size()));
            Ok(())
        }
    }

    fn config() -> ValidatedConfig {
        RenderConfig {
            width: 40,
            height: 30,
            center: Complex::new(-0.5, 0.0),
            scale: 1.5,
            max_iterations: 40,
            ..RenderConfig::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_empty_script_renders_initial_view() {
        let presenter = MockFilePresenter::default();
        let mut controller = CliController::new(&presenter, config());

        assert_eq!(controller.last_frame(), None);

        let frame = controller.run(GestureScript::default()).unwrap();

        assert_eq!(controller.last_frame(), Some(frame));
        assert_eq!(controller.pixel_buffer().buffer_size(), 40 * 30 * 3);
        assert_eq!(frame.generation, 1);
        assert_eq!(frame.view.scale(), 1.5);
        assert_eq!(frame.view.center(), Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_zoom_script_applies_every_frame() {
        let presenter = MockFilePresenter::default();
        let mut controller = CliController::new(&presenter, config());
        let script = GestureScript {
            input: FrameInput {
                pointer: PointerPosition { x: 20.0, y: 15.0 },
                buttons: ButtonState {
                    primary: true,
                    secondary: false,
                },
            },
            frames: 3,
        };

        let frame = controller.run(script).unwrap();

        assert_eq!(frame.generation, 3);
        assert!((frame.view.scale() - 1.5 * 0.9 * 0.9 * 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_write_before_run_is_a_no_op() {
        let presenter = MockFilePresenter::default();
        let controller = CliController::new(&presenter, config());

        controller.write("unused.ppm").unwrap();

        assert!(presenter.writes.borrow().is_empty());
    }

    #[test]
    fn test_write_presents_last_frame() {
        let presenter = MockFilePresenter::default();
        let mut controller = CliController::new(&presenter, config());

        controller.run(GestureScript::default()).unwrap();
        controller.write("out/frame.ppm").unwrap();

        assert_eq!(
            *presenter.writes.borrow(),
            vec![(PathBuf::from("out/frame.ppm"), 40 * 30 * 3)]
        );
    }
}
