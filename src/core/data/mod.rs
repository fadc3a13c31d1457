pub mod colour;
pub mod complex;
pub mod escape_result;
pub mod pixel_buffer;
pub mod point;
pub mod view_state;
pub mod viewport;
