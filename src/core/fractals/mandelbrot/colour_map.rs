use crate::core::actions::render_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::escape_result::EscapeResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandelbrotColourMapKind {
    HueCycle,
    FireGradient,
}

impl MandelbrotColourMapKind {
    pub const ALL: &'static [Self] = &[Self::HueCycle, Self::FireGradient];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HueCycle => "Hue cycle",
            Self::FireGradient => "Fire gradient",
        }
    }
}

impl Default for MandelbrotColourMapKind {
    fn default() -> Self {
        Self::HueCycle
    }
}

impl std::fmt::Display for MandelbrotColourMapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

pub trait MandelbrotColourMap: ColourMap<EscapeResult> + Send + Sync {
    fn kind(&self) -> MandelbrotColourMapKind;
}

impl ColourMap<EscapeResult> for Box<dyn MandelbrotColourMap> {
    fn map(&self, value: EscapeResult, max_iterations: u32) -> Colour {
        (**self).map(value, max_iterations)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
