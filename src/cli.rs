use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "frame-classifier",
    version,
    about = "Classify video frames and overlay the top-K labels"
)]
pub struct Cli {
    /// Image file, directory of images, file://, /dev/videoN, v4l2:// or a device index
    pub input: Option<String>,

    /// Image file (use %i for a frame number) or display://N
    pub output: Option<String>,

    /// ONNX model, or fake:// for random predictions
    #[arg(long)]
    pub model: Option<PathBuf>,

    #[arg(long)]
    pub labels: Option<PathBuf>,

    #[arg(long)]
    pub input_blob: Option<String>,

    #[arg(long)]
    pub output_blob: Option<String>,

    /// Number of predictions to report per frame
    #[arg(long = "topK", visible_alias = "top-k", value_parser = clap::value_parser!(u32).range(1..))]
    pub top_k: Option<u32>,

    #[arg(long)]
    pub input_width: Option<u32>,

    #[arg(long)]
    pub input_height: Option<u32>,

    /// The model already outputs probabilities
    #[arg(long)]
    pub no_softmax: bool,

    /// Extra passes over file inputs, -1 loops forever
    #[arg(long, allow_negative_numbers = true)]
    pub input_loop: Option<i64>,

    #[arg(long)]
    pub capture_timeout_ms: Option<u64>,

    /// TTF/OTF font used for the overlay
    #[arg(long)]
    pub font: Option<PathBuf>,

    #[arg(long)]
    pub font_size: Option<f32>,

    /// Disable the display window
    #[arg(long)]
    pub headless: bool,

    /// Offset of the log timestamps
    #[arg(long, allow_negative_numbers = true)]
    pub utc_offset_hours: Option<i32>,
}

impl Cli {
    pub fn into_config(self) -> Result<Config, Box<dyn std::error::Error + Send + Sync>> {
        let mut config = Config::default();

        if let Some(input) = self.input {
            config.input = input;
        }

        config.headless = self.headless;
        match self.output {
            Some(output) => config.output = Some(output),
            None if self.headless => config.output = None,
            None => {}
        }

        if let Some(model) = self.model {
            config.model.onnx_model_path = model;
        }
        if let Some(labels) = self.labels {
            config.model.labels_path = labels;
        }
        if let Some(input_blob) = self.input_blob {
            config.model.input_blob = input_blob;
        }
        if let Some(output_blob) = self.output_blob {
            config.model.output_blob = output_blob;
        }
        if let Some(height) = self.input_height {
            config.model.input_shape.0 = height;
        }
        if let Some(width) = self.input_width {
            config.model.input_shape.1 = width;
        }
        if self.no_softmax {
            config.model.apply_softmax = false;
        }

        if let Some(top_k) = self.top_k {
            config.top_k = top_k as usize;
        }
        if let Some(input_loop) = self.input_loop {
            config.input_loop = input_loop;
        }
        if let Some(timeout) = self.capture_timeout_ms {
            config.capture_timeout = Duration::from_millis(timeout);
        }
        if let Some(font) = self.font {
            config.font_path = font;
        }
        if let Some(font_size) = self.font_size {
            config.font_size = font_size;
        }
        if let Some(hours) = self.utc_offset_hours {
            config.logger_timezone = chrono::FixedOffset::east_opt(hours * 3600)
                .ok_or_else(|| format!("invalid UTC offset {} hours", hours))?;
        }

        config.validate()?;
        Ok(config)
    }
}
