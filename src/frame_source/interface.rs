use image::DynamicImage;

pub trait FrameSource: Send {
    /// Blocks until the next frame. `Ok(None)` means no frame arrived (timeout or end of stream).
    fn capture(&mut self) -> Result<Option<DynamicImage>, Box<dyn std::error::Error + Send + Sync>>;

    fn is_streaming(&self) -> bool;
}
