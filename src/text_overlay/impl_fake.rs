use crate::library::sync::lock;
use crate::text_overlay::interface::TextOverlay;
use image::{DynamicImage, Rgba};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayCall {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub color: Rgba<u8>,
    pub background: Option<Rgba<u8>>,
}

pub struct TextOverlayFake {
    size: u32,
    calls: Mutex<Vec<OverlayCall>>,
}

impl TextOverlayFake {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<OverlayCall> {
        lock(&self.calls).clone()
    }
}

impl TextOverlay for TextOverlayFake {
    fn overlay_text(
        &self,
        _frame: &mut DynamicImage,
        text: &str,
        x: i32,
        y: i32,
        color: Rgba<u8>,
        background: Option<Rgba<u8>>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        lock(&self.calls).push(OverlayCall {
            text: text.to_string(),
            x,
            y,
            color,
            background,
        });
        Ok(())
    }

    fn size(&self) -> u32 {
        self.size
    }
}
