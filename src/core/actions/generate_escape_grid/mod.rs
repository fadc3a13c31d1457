pub mod generate_escape_grid_parallel;
pub mod generate_escape_grid_serial;
pub mod ports;
