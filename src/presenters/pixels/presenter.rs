use crate::adapters::pixel_format::{RGBA_BYTES_PER_PIXEL, write_rgba_frame};
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{debug, warn};
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
    last_frame: Option<FrameData>,
    last_error_message: Option<String>,
}

impl InteractiveControllerPresenterPort for PixelsPresenter {
    fn present(&mut self, event: RenderEvent<'_>) {
        match event {
            RenderEvent::Frame {
                frame,
                pixel_buffer,
            } => {
                if self.copy_pixel_buffer_into_pixels_frame(pixel_buffer) {
                    self.last_frame = Some(frame);
                    self.last_error_message = None;
                }
            }
            RenderEvent::Error(error) => {
                self.last_error_message = Some(error.message);
            }
        }
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // Fractal first, overlay on top
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;
        self.draw_background();

        Ok(())
    }

    fn last_frame(&self) -> Option<FrameData> {
        self.last_frame
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let mut presenter = Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
            last_frame: None,
            last_error_message: None,
        };
        presenter.draw_background();

        Ok(presenter)
    }

    fn draw_background(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(RGBA_BYTES_PER_PIXEL) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    /// Returns false when the buffer was rendered for a different window size.
    fn copy_pixel_buffer_into_pixels_frame(&mut self, pixel_buffer: &PixelBuffer) -> bool {
        let viewport = pixel_buffer.viewport();

        if viewport.width() != self.width || viewport.height() != self.height {
            debug!(
                "dropping {}x{} frame for {}x{} window",
                viewport.width(),
                viewport.height(),
                self.width,
                self.height
            );
            return false;
        }

        match write_rgba_frame(pixel_buffer, self.pixels.frame_mut()) {
            Ok(()) => true,
            Err(err) => {
                warn!("dropping frame: {}", err);
                false
            }
        }
    }
}
