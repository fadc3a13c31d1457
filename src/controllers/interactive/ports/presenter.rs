use crate::controllers::interactive::events::render_event::RenderEvent;

pub trait InteractiveControllerPresenterPort {
    fn present(&mut self, event: RenderEvent<'_>);
}
