use crate::text_overlay::interface::TextOverlay;
use ab_glyph::{FontVec, PxScale};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size, Blend};
use imageproc::rect::Rect;
use std::path::Path;

const BACKGROUND_PADDING: u32 = 4;

pub struct TextOverlayImageproc {
    font: FontVec,
    size: f32,
}

impl TextOverlayImageproc {
    pub fn new(font_path: &Path, size: f32) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if size.is_nan() || size <= 0.0 {
            return Err(format!("font size must be positive, got {}", size).into());
        }

        let bytes = std::fs::read(font_path)
            .map_err(|e| format!("failed to read font {}: {}", font_path.display(), e))?;
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| format!("invalid font {}: {}", font_path.display(), e))?;

        Ok(Self { font, size })
    }
}

/// Takes the frame out as an RGBA buffer so it can be drawn on with alpha blending.
fn take_rgba_canvas(frame: &mut DynamicImage) -> RgbaImage {
    match std::mem::replace(frame, DynamicImage::new_rgba8(0, 0)) {
        DynamicImage::ImageRgba8(buffer) => buffer,
        other => other.to_rgba8(),
    }
}

impl TextOverlay for TextOverlayImageproc {
    fn overlay_text(
        &self,
        frame: &mut DynamicImage,
        text: &str,
        x: i32,
        y: i32,
        color: Rgba<u8>,
        background: Option<Rgba<u8>>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if text.is_empty() {
            return Ok(());
        }

        let scale = PxScale::from(self.size);
        let mut blend = Blend(take_rgba_canvas(frame));

        if let Some(background) = background {
            let (width, height) = text_size(scale, &self.font, text);
            let pad = BACKGROUND_PADDING as i32;
            let rect = Rect::at(x - pad, y - pad).of_size(
                width.max(1) + 2 * BACKGROUND_PADDING,
                height.max(1) + 2 * BACKGROUND_PADDING,
            );
            draw_filled_rect_mut(&mut blend, rect, background);
        }

        draw_text_mut(&mut blend, color, x, y, scale, &self.font, text);

        *frame = DynamicImage::ImageRgba8(blend.0);
        Ok(())
    }

    fn size(&self) -> u32 {
        self.size.round() as u32
    }
}
