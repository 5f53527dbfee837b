use super::main::FrameClassification;
use crate::library::sync::lock;

impl FrameClassification {
    /// Processes frames until the source or the sink stops streaming. Returns the number
    /// of frames rendered.
    pub fn run(&self) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Classifying {} with {} (topK={})",
            self.config.input,
            self.image_classifier.network_name(),
            self.config.top_k
        ))?;

        let mut frames = 0;

        loop {
            if self.process_frame()?.is_some() {
                frames += 1;
            }

            if !lock(&self.frame_source).is_streaming() {
                self.logger.info("Input stopped streaming")?;
                break;
            }

            if !lock(&self.frame_sink).is_streaming() {
                self.logger.info("Output stopped streaming")?;
                break;
            }
        }

        self.logger.info(&format!("Processed {} frames", frames))?;

        Ok(frames)
    }
}
