pub mod impl_fake;
pub mod impl_tract_onnx;
pub mod interface;
pub mod labels;
pub mod models;
pub mod profiler;
pub mod top_k;
pub mod tract;

use crate::library::logger::interface::Logger;
use impl_fake::ImageClassifierFake;
use impl_tract_onnx::ImageClassifierTractOnnx;
use interface::ImageClassifier;
use labels::LabelTable;
use models::model_config::ModelConfig;
use std::sync::Arc;

pub const FAKE_MODEL: &str = "fake://";

pub fn open(
    config: ModelConfig,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn ImageClassifier + Send + Sync>, Box<dyn std::error::Error + Send + Sync>> {
    if config.onnx_model_path.to_str() == Some(FAKE_MODEL) {
        logger
            .with_namespace("image_classifier")
            .info("Using random predictions")?;
        let labels = LabelTable::load(&config.labels_path)?;
        let image_classifier: Arc<dyn ImageClassifier + Send + Sync> =
            Arc::new(ImageClassifierFake::random(labels));
        return Ok(image_classifier);
    }

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> =
        Arc::new(ImageClassifierTractOnnx::new(config, logger)?);
    Ok(image_classifier)
}
