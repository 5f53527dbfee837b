use crate::frame_sink::interface::FrameSink;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::sync::Arc;

/// Output for headless runs: frames are dropped, statuses are logged.
pub struct FrameSinkNull {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FrameSinkNull {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("frame_sink").with_namespace("null"),
        }
    }
}

impl FrameSink for FrameSinkNull {
    fn render(&mut self, _frame: &DynamicImage) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }

    fn set_status(&mut self, status: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(status)
    }

    fn is_streaming(&self) -> bool {
        true
    }
}
