use crate::core::data::colour::Colour;

pub trait ColourMap<T> {
    /// `max_iterations` is the bound `value` was evaluated with.
    fn map(&self, value: T, max_iterations: u32) -> Colour;

    fn display_name(&self) -> &str;
}
