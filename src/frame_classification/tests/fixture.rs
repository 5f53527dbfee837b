use crate::config::Config;
use crate::frame_classification::main::FrameClassification;
use crate::frame_sink::impl_fake::FrameSinkFake;
use crate::frame_source::impl_fake::FrameSourceFake;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::labels::LabelTable;
use crate::library::logger::{impl_console::LoggerConsole, interface::Logger};
use crate::library::sync::lock;
use crate::text_overlay::impl_fake::TextOverlayFake;
use image::DynamicImage;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// In-memory diagnostic stream that stays readable after being handed to the pipeline.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&lock(&self.0))
            .lines()
            .map(String::from)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        lock(&self.0).extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn imagenet_labels() -> LabelTable {
    LabelTable::from_descriptions((0..1000).map(|class_id| match class_id {
        281 => "tabby, tabby cat".to_string(),
        282 => "tiger cat".to_string(),
        _ => format!("class {}", class_id),
    }))
}

pub fn frame() -> DynamicImage {
    DynamicImage::new_rgb8(64, 48)
}

#[allow(dead_code)]
pub struct Fixture {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub image_classifier: Arc<ImageClassifierFake>,
    pub frame_source: Arc<Mutex<FrameSourceFake>>,
    pub frame_sink: Arc<Mutex<FrameSinkFake>>,
    pub text_overlay: Arc<TextOverlayFake>,
    pub diagnostics: SharedBuffer,
    pub frame_classification: FrameClassification,
}

impl Fixture {
    pub fn new(
        frames: Vec<Option<DynamicImage>>,
        image_classifier: ImageClassifierFake,
        top_k: usize,
    ) -> Self {
        let config = Config {
            top_k,
            ..Config::default()
        };
        let logger: Arc<dyn Logger + Send + Sync> =
            Arc::new(LoggerConsole::new(config.logger_timezone));
        let image_classifier = Arc::new(image_classifier);
        let frame_source = Arc::new(Mutex::new(FrameSourceFake::new(frames)));
        let frame_sink = Arc::new(Mutex::new(FrameSinkFake::new()));
        let text_overlay = Arc::new(TextOverlayFake::new(32));
        let diagnostics = SharedBuffer::default();

        let frame_classification = FrameClassification::new(
            config.clone(),
            logger.clone(),
            image_classifier.clone(),
            frame_source.clone(),
            frame_sink.clone(),
            text_overlay.clone(),
            Arc::new(Mutex::new(diagnostics.clone())),
        );

        Self {
            config,
            logger,
            image_classifier,
            frame_source,
            frame_sink,
            text_overlay,
            diagnostics,
            frame_classification,
        }
    }

    pub fn scripted(
        frames: Vec<Option<DynamicImage>>,
        responses: Vec<Vec<(usize, f32)>>,
        top_k: usize,
    ) -> Self {
        let responses = responses
            .into_iter()
            .map(|response| {
                response
                    .into_iter()
                    .map(|(class_id, confidence)| {
                        crate::image_classifier::interface::Classification {
                            class_id,
                            confidence,
                        }
                    })
                    .collect()
            })
            .collect();

        Self::new(
            frames,
            ImageClassifierFake::scripted(imagenet_labels(), responses),
            top_k,
        )
    }
}
