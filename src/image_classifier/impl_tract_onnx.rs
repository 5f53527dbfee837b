use crate::image_classifier::interface::{Classification, ImageClassifier};
use crate::image_classifier::labels::LabelTable;
use crate::image_classifier::models::model_config::ModelConfig;
use crate::image_classifier::profiler::ProfilerTimes;
use crate::image_classifier::top_k::{select_top_k, softmax};
use crate::image_classifier::tract::image::resize_image_to_tensor;
use crate::library::logger::interface::Logger;
use crate::library::sync::lock;
use image::DynamicImage;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tract_onnx::prelude::*;

pub struct ImageClassifierTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    config: ModelConfig,
    labels: LabelTable,
    network_name: String,
    profiler_times: Mutex<ProfilerTimes>,
}

impl ImageClassifierTractOnnx {
    pub fn new(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let logger = logger
            .with_namespace("image_classifier")
            .with_namespace("tract_onnx");

        logger.info(&format!(
            "Loading model {} (input '{}', output '{}')",
            config.onnx_model_path.display(),
            config.input_blob,
            config.output_blob
        ))?;

        let labels = LabelTable::load(&config.labels_path)?;

        let mut model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .map_err(|e| {
                format!(
                    "failed to load model {}: {}",
                    config.onnx_model_path.display(),
                    e
                )
            })?;
        model.set_input_names([config.input_blob.as_str()])?;
        model.set_output_names([config.output_blob.as_str()])?;

        let (height, width) = config.input_shape;
        let model = model
            .with_input_fact(
                0,
                f32::fact([1, 3, height as usize, width as usize]).into(),
            )?
            .into_optimized()?;

        let num_classes = model
            .output_fact(0)?
            .shape
            .as_concrete()
            .and_then(|shape| shape.last().copied());

        match num_classes {
            Some(n) if n != labels.len() => {
                logger.warn(&format!(
                    "Model has {} classes but {} has {} labels",
                    n,
                    config.labels_path.display(),
                    labels.len()
                ))?;
            }
            _ => {}
        }

        let model = model.into_runnable()?;

        let label_kind = match labels.synset(0) {
            Some(_) => "synset labels",
            None => "labels",
        };
        logger.info(&format!(
            "Loaded {} with {} {}",
            config.network_name(),
            labels.len(),
            label_kind
        ))?;

        Ok(Self {
            model,
            network_name: config.network_name(),
            config,
            labels,
            profiler_times: Mutex::new(ProfilerTimes::default()),
        })
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn classify(
        &self,
        image: &DynamicImage,
        top_k: usize,
    ) -> Result<Vec<Classification>, Box<dyn std::error::Error + Send + Sync>> {
        let started = Instant::now();
        let (height, width) = self.config.input_shape;
        let input = resize_image_to_tensor(image, width, height, &self.config.normalization);
        let pre_process = started.elapsed();

        let started = Instant::now();
        let outputs = self.model.run(tvec!(input.into_tvalue()))?;
        let network = started.elapsed();

        let started = Instant::now();
        let output = outputs
            .first()
            .ok_or("model produced no outputs")?
            .to_array_view::<f32>()?;
        let scores: Vec<f32> = output.iter().copied().collect();

        let confidences = if self.config.apply_softmax {
            softmax(&scores)
        } else {
            scores
        };

        let classifications = select_top_k(&confidences, top_k);
        let post_process = started.elapsed();

        *lock(&self.profiler_times) = ProfilerTimes {
            pre_process,
            network,
            post_process,
        };

        Ok(classifications)
    }

    fn labels(&self) -> &LabelTable {
        &self.labels
    }

    fn network_name(&self) -> &str {
        &self.network_name
    }

    fn profiler_times(&self) -> ProfilerTimes {
        *lock(&self.profiler_times)
    }
}
