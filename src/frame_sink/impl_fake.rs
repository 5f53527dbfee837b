use crate::frame_sink::interface::FrameSink;
use image::DynamicImage;

#[derive(Default)]
pub struct FrameSinkFake {
    pub rendered: Vec<DynamicImage>,
    pub statuses: Vec<String>,
    pub closed: bool,
}

impl FrameSinkFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameSink for FrameSinkFake {
    fn render(&mut self, frame: &DynamicImage) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.rendered.push(frame.clone());
        Ok(())
    }

    fn set_status(&mut self, status: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.statuses.push(status.to_string());
        Ok(())
    }

    fn is_streaming(&self) -> bool {
        !self.closed
    }
}
