use crate::frame_source::interface::FrameSource;
use crate::library::logger::interface::Logger;
use image::DynamicImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tif", "tiff", "webp"];

/// Reads a single image or every image of a directory, in file name order.
pub struct FrameSourceImageFile {
    paths: Vec<PathBuf>,
    next_index: usize,
    /// Extra passes over `paths`; negative loops forever.
    loops_remaining: i64,
    streaming: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FrameSourceImageFile {
    pub fn new(
        path: &Path,
        input_loop: i64,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger
            .with_namespace("frame_source")
            .with_namespace("image_file");

        let paths = if path.is_dir() {
            list_images(path)?
        } else if path.is_file() {
            vec![path.to_path_buf()]
        } else {
            return Err(format!("input {} does not exist", path.display()).into());
        };

        if paths.is_empty() {
            return Err(format!("no images found in {}", path.display()).into());
        }

        logger.info(&format!(
            "Opened {} ({} image{})",
            path.display(),
            paths.len(),
            if paths.len() == 1 { "" } else { "s" }
        ))?;

        Ok(Self {
            paths,
            next_index: 0,
            loops_remaining: input_loop,
            streaming: true,
            logger,
        })
    }
}

fn list_images(dir: &Path) -> Result<Vec<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
    let mut paths = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_image = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false);

        if path.is_file() && is_image {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

impl FrameSource for FrameSourceImageFile {
    fn capture(&mut self) -> Result<Option<DynamicImage>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.streaming {
            return Ok(None);
        }

        if self.next_index >= self.paths.len() {
            if self.loops_remaining == 0 {
                self.streaming = false;
                return Ok(None);
            }
            if self.loops_remaining > 0 {
                self.loops_remaining -= 1;
            }
            self.next_index = 0;
        }

        let path = &self.paths[self.next_index];
        self.next_index += 1;

        let image = image::open(path)
            .map_err(|e| format!("failed to load image {}: {}", path.display(), e))?;

        self.logger.info(&format!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        ))?;

        if self.next_index >= self.paths.len() && self.loops_remaining == 0 {
            self.streaming = false;
        }

        Ok(Some(image))
    }

    fn is_streaming(&self) -> bool {
        self.streaming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::logger::impl_console::LoggerConsole;
    use chrono::{Offset, Utc};
    use image::{Rgb, RgbImage};

    fn logger() -> Arc<dyn Logger + Send + Sync> {
        Arc::new(LoggerConsole::new(Utc.fix()))
    }

    fn write_image(dir: &Path, name: &str, width: u32) {
        let image = RgbImage::from_pixel(width, 8, Rgb([10, 20, 30]));
        image.save(dir.join(name)).unwrap();
    }

    #[test]
    fn test_directory_is_read_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "b.png", 2);
        write_image(dir.path(), "a.png", 1);
        std::fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

        let mut source = FrameSourceImageFile::new(dir.path(), 0, logger()).unwrap();

        assert_eq!(source.capture().unwrap().unwrap().width(), 1);
        assert!(source.is_streaming());
        assert_eq!(source.capture().unwrap().unwrap().width(), 2);
        assert!(!source.is_streaming());
        assert!(source.capture().unwrap().is_none());
    }

    #[test]
    fn test_single_file_with_loop() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "cat.png", 3);

        let mut source =
            FrameSourceImageFile::new(&dir.path().join("cat.png"), 1, logger()).unwrap();

        assert!(source.capture().unwrap().is_some());
        assert!(source.is_streaming());
        assert!(source.capture().unwrap().is_some());
        assert!(!source.is_streaming());
        assert!(source.capture().unwrap().is_none());
    }

    #[test]
    fn test_negative_loop_streams_forever() {
        let dir = tempfile::tempdir().unwrap();
        write_image(dir.path(), "cat.png", 3);

        let mut source =
            FrameSourceImageFile::new(&dir.path().join("cat.png"), -1, logger()).unwrap();

        for _ in 0..5 {
            assert!(source.capture().unwrap().is_some());
        }
        assert!(source.is_streaming());
    }

    #[test]
    fn test_missing_and_empty_inputs_fail() {
        let dir = tempfile::tempdir().unwrap();

        assert!(FrameSourceImageFile::new(dir.path(), 0, logger()).is_err());
        assert!(FrameSourceImageFile::new(&dir.path().join("missing.jpg"), 0, logger()).is_err());
    }

    #[test]
    fn test_undecodable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.jpg"), b"not a jpeg").unwrap();

        let mut source = FrameSourceImageFile::new(dir.path(), 0, logger()).unwrap();

        assert!(source.capture().is_err());
    }
}
