use egui::Context as EguiContext;

use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;

/// A window-backed presenter: receives frames from the controller and draws
/// them together with the egui overlay.
pub trait GuiPresenterPort: InteractiveControllerPresenterPort {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;
    fn last_frame(&self) -> Option<FrameData>;
    fn last_error(&self) -> Option<&str>;
}
