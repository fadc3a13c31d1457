/// Pointer buttons held during the current frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub primary: bool,
    pub secondary: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomGesture {
    ZoomIn,
    ZoomOut,
}

impl ButtonState {
    /// Primary zooms in, secondary zooms out; primary wins when both are held.
    #[must_use]
    pub fn gesture(&self) -> Option<ZoomGesture> {
        if self.primary {
            Some(ZoomGesture::ZoomIn)
        } else if self.secondary {
            Some(ZoomGesture::ZoomOut)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_buttons_no_gesture() {
        assert_eq!(ButtonState::default().gesture(), None);
    }

    #[test]
    fn test_primary_zooms_in() {
        let buttons = ButtonState {
            primary: true,
            secondary: false,
        };

        assert_eq!(buttons.gesture(), Some(ZoomGesture::ZoomIn));
    }

    #[test]
    fn test_secondary_zooms_out() {
        let buttons = ButtonState {
            primary: false,
            secondary: true,
        };

        assert_eq!(buttons.gesture(), Some(ZoomGesture::ZoomOut));
    }

    #[test]
    fn test_primary_wins_when_both_held() {
        let buttons = ButtonState {
            primary: true,
            secondary: true,
        };

        assert_eq!(buttons.gesture(), Some(ZoomGesture::ZoomIn));
    }
}
