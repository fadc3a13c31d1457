use crate::controllers::interactive::InteractiveController;
use crate::core::config::render_config::ConfigError;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotColourMapKind;

pub const MAX_ITERATIONS_SLIDER_LIMIT: u32 = 5000;

/// Values edited by the overlay widgets. They are pushed into the controller
/// once per frame, before the frame renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiState {
    pub max_iterations: u32,
    pub colour_map_kind: MandelbrotColourMapKind,
    pub reset_requested: bool,
}

impl UiState {
    #[must_use]
    pub fn from_controller(controller: &InteractiveController) -> Self {
        Self {
            max_iterations: controller.max_iterations(),
            colour_map_kind: controller.colour_map_kind(),
            reset_requested: false,
        }
    }

    pub fn apply(&mut self, controller: &mut InteractiveController) -> Result<(), ConfigError> {
        if self.reset_requested {
            controller.reset_view();
            self.reset_requested = false;
        }

        controller.set_colour_map_kind(self.colour_map_kind);

        if self.max_iterations != controller.max_iterations() {
            if let Err(err) = controller.set_max_iterations(self.max_iterations) {
                self.max_iterations = controller.max_iterations();
                return Err(err);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::data::frame_input::FrameInput;
    use crate::core::config::render_config::RenderConfig;
    use crate::core::data::point::PointerPosition;
    use crate::core::view::gesture::ButtonState;

    fn create_controller() -> InteractiveController {
        let config = RenderConfig {
            width: 32,
            height: 24,
            ..RenderConfig::default()
        };

        InteractiveController::new(config.validate().unwrap())
    }

    #[test]
    fn test_from_controller_mirrors_settings() {
        let controller = create_controller();

        let ui_state = UiState::from_controller(&controller);

        assert_eq!(ui_state.max_iterations, 100);
        assert_eq!(ui_state.colour_map_kind, MandelbrotColourMapKind::HueCycle);
        assert!(!ui_state.reset_requested);
    }

    #[test]
    fn test_apply_pushes_edits_into_controller() {
        let mut controller = create_controller();
        let mut ui_state = UiState::from_controller(&controller);

        ui_state.max_iterations = 750;
        ui_state.colour_map_kind = MandelbrotColourMapKind::FireGradient;
        ui_state.apply(&mut controller).unwrap();

        assert_eq!(controller.max_iterations(), 750);
        assert_eq!(
            controller.colour_map_kind(),
            MandelbrotColourMapKind::FireGradient
        );
    }

    #[test]
    fn test_apply_rejects_zero_iterations_and_restores_slider() {
        let mut controller = create_controller();
        let mut ui_state = UiState::from_controller(&controller);

        ui_state.max_iterations = 0;

        assert_eq!(
            ui_state.apply(&mut controller),
            Err(ConfigError::InvalidIterationBound { max_iterations: 0 })
        );
        assert_eq!(ui_state.max_iterations, 100);
        assert_eq!(controller.max_iterations(), 100);
    }

    #[test]
    fn test_reset_request_is_consumed_once() {
        let mut controller = create_controller();
        let initial = controller.view();
        let mut ui_state = UiState::from_controller(&controller);

        controller
            .frame(FrameInput {
                pointer: PointerPosition { x: 1.0, y: 1.0 },
                buttons: ButtonState {
                    primary: false,
                    secondary: true,
                },
            })
            .unwrap();
        ui_state.reset_requested = true;
        ui_state.apply(&mut controller).unwrap();

        assert_eq!(controller.view(), initial);
        assert!(!ui_state.reset_requested);
    }
}
