use crate::image_classifier::labels::LabelTable;
use crate::image_classifier::profiler::ProfilerTimes;
use image::DynamicImage;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub class_id: usize,
    pub confidence: f32,
}

pub trait ImageClassifier: Send {
    /// Returns at most `top_k` classifications ordered by non-increasing confidence.
    fn classify(
        &self,
        image: &DynamicImage,
        top_k: usize,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>>;

    fn labels(&self) -> &LabelTable;

    fn class_label(&self, class_id: usize) -> &str {
        self.labels().description(class_id)
    }

    fn network_name(&self) -> &str;

    /// Timings of the most recent `classify` call.
    fn profiler_times(&self) -> ProfilerTimes;

    fn network_fps(&self) -> f32 {
        self.profiler_times().fps()
    }
}
