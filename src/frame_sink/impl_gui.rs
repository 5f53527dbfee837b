use crate::frame_sink::interface::FrameSink;
use crate::library::sync::lock;
use image::{DynamicImage, RgbaImage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone, Default)]
struct SharedDisplay {
    pending_frame: Arc<Mutex<Option<RgbaImage>>>,
    status: Arc<Mutex<String>>,
    window_closed: Arc<AtomicBool>,
    pipeline_finished: Arc<AtomicBool>,
}

/// Pipeline side of the display: hands frames and the status to the window.
pub struct FrameSinkGui {
    shared: SharedDisplay,
}

/// Window side of the display. Must run on the main thread.
pub struct DisplayWindow {
    shared: SharedDisplay,
    title: String,
    texture: Option<egui::TextureHandle>,
}

pub fn new_display(index: u32) -> (FrameSinkGui, DisplayWindow) {
    let shared = SharedDisplay::default();
    let sink = FrameSinkGui {
        shared: shared.clone(),
    };
    let window = DisplayWindow {
        shared,
        title: format!("display://{}", index),
        texture: None,
    };
    (sink, window)
}

impl FrameSink for FrameSinkGui {
    fn render(&mut self, frame: &DynamicImage) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *lock(&self.shared.pending_frame) = Some(frame.to_rgba8());
        Ok(())
    }

    fn set_status(&mut self, status: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        *lock(&self.shared.status) = status.to_string();
        Ok(())
    }

    fn is_streaming(&self) -> bool {
        !self.shared.window_closed.load(Ordering::SeqCst)
    }
}

impl Drop for FrameSinkGui {
    fn drop(&mut self) {
        self.shared.pipeline_finished.store(true, Ordering::SeqCst);
    }
}

impl DisplayWindow {
    /// Blocks until the window is closed by the user or the pipeline finishes.
    pub fn run(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let window_closed = self.shared.window_closed.clone();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size([1280.0, 720.0]),
            ..Default::default()
        };
        let app_name = self.title.clone();

        let result = eframe::run_native(&app_name, options, Box::new(|_cc| Box::new(self)));

        window_closed.store(true, Ordering::SeqCst);
        result.map_err(|e| format!("display window failed: {}", e).into())
    }
}

impl eframe::App for DisplayWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(image) = lock(&self.shared.pending_frame).take() {
            let size = [image.width() as usize, image.height() as usize];
            let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
            match &mut self.texture {
                Some(texture) => texture.set(color_image, egui::TextureOptions::LINEAR),
                None => {
                    self.texture = Some(ctx.load_texture(
                        "frame",
                        color_image,
                        egui::TextureOptions::LINEAR,
                    ))
                }
            }
        }

        let status = lock(&self.shared.status).clone();
        if !status.is_empty() && status != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(status.clone()));
            self.title = status;
        }

        if self.shared.pipeline_finished.load(Ordering::SeqCst) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default().show(ctx, |ui| match &self.texture {
            Some(texture) => {
                ui.add(
                    egui::Image::new(egui::load::SizedTexture::new(
                        texture.id(),
                        texture.size_vec2(),
                    ))
                    .shrink_to_fit(),
                );
            }
            None => {
                ui.label("Waiting for frames...");
            }
        });

        ctx.request_repaint_after(Duration::from_millis(15));
    }
}
