use crate::frame_sink::interface::FrameSink;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const FRAME_INDEX_PLACEHOLDER: &str = "%i";

/// Saves every rendered frame. A `%i` in the path is replaced by the frame index,
/// otherwise the same file is overwritten.
pub struct FrameSinkImageFile {
    path_pattern: String,
    frame_index: u64,
    status: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FrameSinkImageFile {
    pub fn new(
        path: &Path,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger
            .with_namespace("frame_sink")
            .with_namespace("image_file");

        if image::ImageFormat::from_path(path).is_err() {
            return Err(format!(
                "output {} has no supported image extension",
                path.display()
            )
            .into());
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {}", parent.display(), e))?;
        }

        logger.info(&format!("Writing frames to {}", path.display()))?;

        Ok(Self {
            path_pattern: path.to_string_lossy().into_owned(),
            frame_index: 0,
            status: String::new(),
            logger,
        })
    }

    #[allow(dead_code)]
    pub fn status(&self) -> &str {
        &self.status
    }
}

pub fn frame_path(pattern: &str, frame_index: u64) -> PathBuf {
    PathBuf::from(pattern.replace(FRAME_INDEX_PLACEHOLDER, &frame_index.to_string()))
}

impl FrameSink for FrameSinkImageFile {
    fn render(&mut self, frame: &DynamicImage) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let path = frame_path(&self.path_pattern, self.frame_index);

        // jpeg and bmp can't carry alpha
        DynamicImage::ImageRgb8(frame.to_rgb8())
            .save(&path)
            .map_err(|e| format!("failed to save {}: {}", path.display(), e))?;

        self.logger.info(&format!("Saved {}", path.display()))?;
        self.frame_index += 1;

        Ok(())
    }

    fn set_status(&mut self, status: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.status = status.to_string();
        Ok(())
    }

    fn is_streaming(&self) -> bool {
        true
    }
}
