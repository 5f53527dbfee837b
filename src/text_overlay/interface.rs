use image::{DynamicImage, Rgba};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const GRAY40: Rgba<u8> = Rgba([40, 40, 40, 100]);

pub trait TextOverlay: Send + Sync {
    /// Draws `text` with its top-left corner at (`x`, `y`), over an optional background box.
    fn overlay_text(
        &self,
        frame: &mut DynamicImage,
        text: &str,
        x: i32,
        y: i32,
        color: Rgba<u8>,
        background: Option<Rgba<u8>>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Line height in pixels.
    fn size(&self) -> u32;
}
