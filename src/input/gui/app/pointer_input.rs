use crate::controllers::interactive::data::frame_input::FrameInput;
use crate::core::data::point::PointerPosition;
use crate::core::view::gesture::ButtonState;
use winit::event::{ElementState, MouseButton};

/// Last known pointer position and mouse button state, in physical window pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerInputState {
    position: PointerPosition,
    buttons: ButtonState,
}

impl PointerInputState {
    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        self.position = PointerPosition { x, y };
    }

    pub fn handle_mouse_input(&mut self, button: MouseButton, state: ElementState) {
        let pressed = state == ElementState::Pressed;

        match button {
            MouseButton::Left => self.buttons.primary = pressed,
            MouseButton::Right => self.buttons.secondary = pressed,
            _ => {}
        }
    }

    /// Buttons are dropped when the window loses the pointer, since the
    /// matching release may never arrive.
    pub fn release_buttons(&mut self) {
        self.buttons = ButtonState::default();
    }

    /// Input for the next frame. While the UI overlay owns the pointer the
    /// buttons are reported as released so clicks on widgets do not zoom.
    #[must_use]
    pub fn snapshot(&self, pointer_captured_by_ui: bool) -> FrameInput {
        let buttons = if pointer_captured_by_ui {
            ButtonState::default()
        } else {
            self.buttons
        };

        FrameInput {
            pointer: self.position,
            buttons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PointerInputState;
    use crate::core::data::point::PointerPosition;
    use winit::event::{ElementState, MouseButton};

    #[test]
    fn test_press_and_release_updates_buttons() {
        let mut input = PointerInputState::default();

        input.handle_mouse_input(MouseButton::Left, ElementState::Pressed);
        input.handle_mouse_input(MouseButton::Right, ElementState::Pressed);

        let pressed = input.snapshot(false);
        assert!(pressed.buttons.primary);
        assert!(pressed.buttons.secondary);

        input.handle_mouse_input(MouseButton::Left, ElementState::Released);

        let released = input.snapshot(false);
        assert!(!released.buttons.primary);
        assert!(released.buttons.secondary);
    }

    #[test]
    fn test_other_buttons_are_ignored() {
        let mut input = PointerInputState::default();

        input.handle_mouse_input(MouseButton::Middle, ElementState::Pressed);

        assert_eq!(input, PointerInputState::default());
    }

    #[test]
    fn test_cursor_position_is_tracked() {
        let mut input = PointerInputState::default();

        input.handle_cursor_moved(12.5, 300.0);

        assert_eq!(input.snapshot(false).pointer, PointerPosition { x: 12.5, y: 300.0 });
    }

    #[test]
    fn test_ui_capture_masks_buttons_but_keeps_position() {
        let mut input = PointerInputState::default();
        input.handle_cursor_moved(4.0, 8.0);
        input.handle_mouse_input(MouseButton::Left, ElementState::Pressed);

        let captured = input.snapshot(true);

        assert!(!captured.buttons.primary);
        assert_eq!(captured.pointer, PointerPosition { x: 4.0, y: 8.0 });
        assert!(input.snapshot(false).buttons.primary);
    }

    #[test]
    fn test_release_buttons_clears_held_state() {
        let mut input = PointerInputState::default();
        input.handle_mouse_input(MouseButton::Right, ElementState::Pressed);

        input.release_buttons();

        assert!(!input.snapshot(false).buttons.secondary);
    }
}
