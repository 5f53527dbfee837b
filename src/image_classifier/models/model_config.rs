use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

impl Normalization {
    pub const IMAGENET: Normalization = Normalization {
        mean: [0.485, 0.456, 0.406],
        std: [0.229, 0.224, 0.225],
    };

    /// Plain [0,1] scaling.
    #[allow(dead_code)]
    pub const UNIT: Normalization = Normalization {
        mean: [0.0, 0.0, 0.0],
        std: [1.0, 1.0, 1.0],
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    pub onnx_model_path: PathBuf,
    pub labels_path: PathBuf,
    pub input_blob: String,
    pub output_blob: String,
    /// (height, width)
    pub input_shape: (u32, u32),
    pub normalization: Normalization,
    pub apply_softmax: bool,
}

impl ModelConfig {
    pub fn network_name(&self) -> String {
        self.onnx_model_path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.onnx_model_path.display().to_string())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            onnx_model_path: PathBuf::from("model/resnet18.onnx"),
            labels_path: PathBuf::from("model/labels.txt"),
            input_blob: "input_0".to_string(),
            output_blob: "output_0".to_string(),
            input_shape: (224, 224),
            normalization: Normalization::IMAGENET,
            apply_softmax: true,
        }
    }
}
