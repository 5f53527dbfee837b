use crate::frame_source::interface::FrameSource;
use crate::library::logger::interface::Logger;
use image::{DynamicImage, ImageFormat};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use v4l::{
    buffer::Type, io::mmap::Stream as MmapStream, io::traits::CaptureStream, video::Capture,
    Device, Format, FourCC,
};

const BUFFER_COUNT: u32 = 4;

/// V4L2 capture device delivering MJPG buffers.
pub struct FrameSourceV4l2 {
    stream: MmapStream<'static>,
    size: (u32, u32),
    streaming: bool,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FrameSourceV4l2 {
    pub fn new(
        path: &Path,
        timeout: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger.with_namespace("frame_source").with_namespace("v4l2");

        let device = Device::with_path(path)
            .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
        let device_format = Capture::format(&device)?;

        let actual_format = Capture::set_format(
            &device,
            &Format::new(
                device_format.width,
                device_format.height,
                FourCC::new(b"MJPG"),
            ),
        )?;

        if &actual_format.fourcc.repr != b"MJPG" {
            return Err(format!(
                "{} does not support MJPG capture (got {})",
                path.display(),
                actual_format.fourcc
            )
            .into());
        }

        let mut stream = MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)?;
        stream.set_timeout(timeout);

        logger.info(&format!(
            "Opened {} at {}x{}",
            path.display(),
            actual_format.width,
            actual_format.height
        ))?;

        Ok(Self {
            stream,
            size: (actual_format.width, actual_format.height),
            streaming: true,
            logger,
        })
    }
}

impl FrameSource for FrameSourceV4l2 {
    fn capture(&mut self) -> Result<Option<DynamicImage>, Box<dyn std::error::Error + Send + Sync>> {
        match CaptureStream::next(&mut self.stream) {
            Ok((data, metadata)) => {
                let used = (metadata.bytesused as usize).min(data.len());
                let data = if used > 0 { &data[..used] } else { data };
                let image = image::load_from_memory_with_format(data, ImageFormat::Jpeg)?;
                Ok(Some(image))
            }
            Err(error) if error.kind() == std::io::ErrorKind::TimedOut => {
                self.logger.info(&format!(
                    "Capture timed out ({}x{} stream)",
                    self.size.0, self.size.1
                ))?;
                Ok(None)
            }
            Err(error) => {
                self.streaming = false;
                Err(format!("capture failed: {}", error).into())
            }
        }
    }

    fn is_streaming(&self) -> bool {
        self.streaming
    }
}
