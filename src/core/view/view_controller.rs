use log::debug;
use std::error::Error;
use std::fmt;

use crate::core::data::point::PointerPosition;
use crate::core::data::view_state::ViewState;
use crate::core::data::viewport::Viewport;
use crate::core::mapping::view_mapper::ViewMapper;
use crate::core::view::gesture::{ButtonState, ZoomGesture};

pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 0.9;
pub const DEFAULT_ZOOM_OUT_FACTOR: f64 = 1.1;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomFactorError {
    InvalidFactor { factor: f64 },
}

impl fmt::Display for ZoomFactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFactor { factor } => {
                write!(f, "zoom factor must be positive and finite: {}", factor)
            }
        }
    }
}

impl Error for ZoomFactorError {}

/// Scale multipliers applied per frame while a zoom button is held.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomFactors {
    zoom_in: f64,
    zoom_out: f64,
}

impl ZoomFactors {
    pub fn new(zoom_in: f64, zoom_out: f64) -> Result<Self, ZoomFactorError> {
        for factor in [zoom_in, zoom_out] {
            if !(factor > 0.0 && factor.is_finite()) {
                return Err(ZoomFactorError::InvalidFactor { factor });
            }
        }

        Ok(Self { zoom_in, zoom_out })
    }

    #[must_use]
    pub fn zoom_in(&self) -> f64 {
        self.zoom_in
    }

    #[must_use]
    pub fn zoom_out(&self) -> f64 {
        self.zoom_out
    }

    #[must_use]
    pub fn for_gesture(&self, gesture: ZoomGesture) -> f64 {
        match gesture {
            ZoomGesture::ZoomIn => self.zoom_in,
            ZoomGesture::ZoomOut => self.zoom_out,
        }
    }
}

impl Default for ZoomFactors {
    fn default() -> Self {
        Self {
            zoom_in: DEFAULT_ZOOM_IN_FACTOR,
            zoom_out: DEFAULT_ZOOM_OUT_FACTOR,
        }
    }
}

/// Applies one frame of pointer input to `view`.
///
/// The plane point under the pointer is computed against the view *before*
/// the change and stays under the pointer afterwards. With no button held, or
/// when the zoom cannot be applied (degenerate viewport, scale leaving the
/// representable range), `view` is returned unchanged.
#[must_use]
pub fn pan_zoom_from_pointer(
    pointer: PointerPosition,
    viewport: Viewport,
    view: ViewState,
    buttons: ButtonState,
    factors: ZoomFactors,
) -> ViewState {
    let Some(gesture) = buttons.gesture() else {
        return view;
    };

    let mapper = match ViewMapper::new(viewport, view) {
        Ok(mapper) => mapper,
        Err(err) => {
            debug!("ignoring {:?}: {}", gesture, err);
            return view;
        }
    };

    let anchor = mapper.pointer_to_plane(pointer);
    let factor = factors.for_gesture(gesture);

    view.zoomed_about(anchor, factor).unwrap_or_else(|| {
        debug!(
            "ignoring {:?}: scale {} * {} is out of range",
            gesture,
            view.scale(),
            factor
        );
        view
    })
}

/// Owns the mutable view for a session. The only writer of [`ViewState`].
#[derive(Debug, Clone)]
pub struct ViewController {
    view: ViewState,
    initial: ViewState,
    factors: ZoomFactors,
}

impl ViewController {
    #[must_use]
    pub fn new(initial: ViewState, factors: ZoomFactors) -> Self {
        Self {
            view: initial,
            initial,
            factors,
        }
    }

    #[must_use]
    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn update(
        &mut self,
        pointer: PointerPosition,
        viewport: Viewport,
        buttons: ButtonState,
    ) -> ViewState {
        self.view = pan_zoom_from_pointer(pointer, viewport, self.view, buttons, self.factors);
        self.view
    }

    pub fn reset(&mut self) {
        self.view = self.initial;
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(ViewState::default(), ZoomFactors::default())
    }
}
