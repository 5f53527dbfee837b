use crate::frame_source::interface::FrameSource;
use image::DynamicImage;
use std::collections::VecDeque;

/// Replays a script of frames; `None` entries behave like capture timeouts.
pub struct FrameSourceFake {
    frames: VecDeque<Option<DynamicImage>>,
    capture_count: usize,
}

impl FrameSourceFake {
    pub fn new(frames: Vec<Option<DynamicImage>>) -> Self {
        Self {
            frames: frames.into(),
            capture_count: 0,
        }
    }

    pub fn capture_count(&self) -> usize {
        self.capture_count
    }
}

impl FrameSource for FrameSourceFake {
    fn capture(&mut self) -> Result<Option<DynamicImage>, Box<dyn std::error::Error + Send + Sync>> {
        self.capture_count += 1;
        Ok(self.frames.pop_front().flatten())
    }

    fn is_streaming(&self) -> bool {
        !self.frames.is_empty()
    }
}
