use image::DynamicImage;

pub trait FrameSink: Send {
    fn render(&mut self, frame: &DynamicImage) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Title bar or status line of the output.
    fn set_status(&mut self, status: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn is_streaming(&self) -> bool;
}
