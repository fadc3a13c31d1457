pub mod generate_escape_grid;
pub mod render_frame;
