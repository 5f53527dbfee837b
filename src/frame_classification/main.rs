use crate::config::Config;
use crate::frame_sink::interface::FrameSink;
use crate::frame_source::interface::FrameSource;
use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::library::logger::interface::Logger;
use crate::text_overlay::interface::TextOverlay;
use std::io::Write;
use std::sync::{Arc, Mutex};

/// Result of one capture-classify-annotate-render cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutcome {
    /// In the order the classifier returned them.
    pub classifications: Vec<Classification>,
    pub labels: Vec<String>,
    /// Percentage of the last classification iterated, which is the lowest ranked one
    /// rather than the top one. `None` when nothing was classified.
    pub confidence: Option<f32>,
}

/// Long-lived resources of the pipeline, opened once at startup.
pub struct FrameClassification {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    pub frame_source: Arc<Mutex<dyn FrameSource>>,
    pub frame_sink: Arc<Mutex<dyn FrameSink>>,
    pub text_overlay: Arc<dyn TextOverlay + Send + Sync>,
    pub diagnostics: Arc<Mutex<dyn Write + Send>>,
}

impl FrameClassification {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        frame_source: Arc<Mutex<dyn FrameSource>>,
        frame_sink: Arc<Mutex<dyn FrameSink>>,
        text_overlay: Arc<dyn TextOverlay + Send + Sync>,
        diagnostics: Arc<Mutex<dyn Write + Send>>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("frame_classification"),
            image_classifier,
            frame_source,
            frame_sink,
            text_overlay,
            diagnostics,
        }
    }
}
