pub mod frame_data;
pub mod frame_input;
