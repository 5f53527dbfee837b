use crate::image_classifier::models::model_config::ModelConfig;
use chrono::{Offset, Utc};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub input: String,
    /// `None` runs without an output.
    pub output: Option<String>,
    pub top_k: usize,
    /// Extra passes over file inputs, negative loops forever.
    pub input_loop: i64,
    pub capture_timeout: Duration,
    pub font_path: PathBuf,
    pub font_size: f32,
    pub headless: bool,
    pub diagnostic_prefix: String,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            input: "/dev/video0".to_string(),
            output: Some("display://0".to_string()),
            top_k: 1,
            input_loop: 0,
            capture_timeout: Duration::from_millis(1000),
            font_path: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
            font_size: 32.0,
            headless: false,
            diagnostic_prefix: "imagenet".to_string(),
            logger_timezone: Utc.fix(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.top_k == 0 {
            return Err("topK must be at least 1".into());
        }

        let (height, width) = self.model.input_shape;
        if height == 0 || width == 0 {
            return Err(format!("invalid network input size {}x{}", width, height).into());
        }

        Ok(())
    }
}
