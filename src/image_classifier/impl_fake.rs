use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::labels::LabelTable;
use crate::image_classifier::profiler::ProfilerTimes;
use crate::image_classifier::top_k::{select_top_k, softmax};
use crate::library::sync::lock;
use image::DynamicImage;
use rand::distr::{Distribution, Uniform};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Instant;

pub struct ImageClassifierFake {
    labels: LabelTable,
    responses: Mutex<VecDeque<Vec<Classification>>>,
    random: bool,
    classify_count: AtomicUsize,
    profiler_times: Mutex<ProfilerTimes>,
}

impl ImageClassifierFake {
    /// Answers each classify call with the next scripted response, then with no classifications.
    pub fn scripted(labels: LabelTable, responses: Vec<Vec<Classification>>) -> Self {
        Self {
            labels,
            responses: Mutex::new(responses.into()),
            random: false,
            classify_count: AtomicUsize::new(0),
            profiler_times: Mutex::new(ProfilerTimes::default()),
        }
    }

    /// Answers with random confidences over every label.
    pub fn random(labels: LabelTable) -> Self {
        Self {
            random: true,
            ..Self::scripted(labels, vec![])
        }
    }

    #[allow(dead_code)]
    pub fn classify_count(&self) -> usize {
        self.classify_count.load(Ordering::SeqCst)
    }

    fn random_classifications(
        &self,
        top_k: usize,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::rng();
        let logit_dist = Uniform::new(-4.0f32, 4.0f32)?;
        let logits: Vec<f32> = (0..self.labels.len())
            .map(|_| logit_dist.sample(&mut rng))
            .collect();

        Ok(select_top_k(&softmax(&logits), top_k))
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn classify(
        &self,
        _image: &DynamicImage,
        top_k: usize,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let started = Instant::now();
        self.classify_count.fetch_add(1, Ordering::SeqCst);

        let mut classifications = if self.random {
            self.random_classifications(top_k)?
        } else {
            lock(&self.responses).pop_front().unwrap_or_default()
        };
        classifications.truncate(top_k);

        *lock(&self.profiler_times) = ProfilerTimes {
            network: started.elapsed(),
            ..ProfilerTimes::default()
        };

        Ok(classifications)
    }

    fn labels(&self) -> &LabelTable {
        &self.labels
    }

    fn network_name(&self) -> &str {
        "fake"
    }

    fn profiler_times(&self) -> ProfilerTimes {
        *lock(&self.profiler_times)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_responses_in_order_then_empty() {
        let classifier = ImageClassifierFake::scripted(
            LabelTable::from_descriptions(["cat", "dog"]),
            vec![vec![Classification {
                class_id: 1,
                confidence: 0.9,
            }]],
        );
        let image = DynamicImage::new_rgb8(4, 4);

        assert_eq!(classifier.classify(&image, 5).unwrap()[0].class_id, 1);
        assert!(classifier.classify(&image, 5).unwrap().is_empty());
        assert_eq!(classifier.classify_count(), 2);
    }

    #[test]
    fn test_random_respects_top_k_and_order() {
        let classifier =
            ImageClassifierFake::random(LabelTable::from_descriptions(["a", "b", "c", "d"]));
        let image = DynamicImage::new_rgb8(4, 4);

        let classifications = classifier.classify(&image, 3).unwrap();

        assert_eq!(classifications.len(), 3);
        assert!(classifications
            .windows(2)
            .all(|pair| pair[0].confidence >= pair[1].confidence));
        assert!(classifications
            .iter()
            .all(|c| (0.0..=1.0).contains(&c.confidence)));
    }
}
