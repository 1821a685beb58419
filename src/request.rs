//! # Cost Request Module
//!
//! Ephemeral request parameters for a single price calculation
//!
//! ## Key Components
//! - [`CostRequest`] - One quote's worth of generation parameters
//! - [`ImageSource`] - Where the blog's images come from
//! - [`AiImageBilling`] - The two AI-image pricing strategies

use std::collections::BTreeSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Image source for a generation request. Unknown values from older or
/// foreign payloads deserialize to `None` and price as free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ImageSource {
    #[default]
    None,
    Stock,
    Ai,
    Upload,
}

impl From<String> for ImageSource {
    fn from(value: String) -> Self {
        match value.as_str() {
            "stock" => Self::Stock,
            "ai" => Self::Ai,
            "upload" => Self::Upload,
            _ => Self::None,
        }
    }
}

/// How AI-generated images are billed. The regenerate flow charges a flat
/// per-request fee; the pricing calculator charges per image. The two
/// formulas are intentionally kept distinct (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AiImageBilling {
    #[default]
    FlatFee,
    PerImage,
}

/// Parameters for one price calculation. Built fresh from form state on
/// every recalculation, never mutated afterwards, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostRequest {
    pub word_count: u64,
    pub features: BTreeSet<String>,
    pub ai_model: String,
    pub include_images: bool,
    pub image_source: ImageSource,
    pub number_of_images: u64,
    /// Discount fraction in [0, 1), e.g. 0.25 for the Cost Cutter switch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl Default for CostRequest {
    fn default() -> Self {
        Self {
            word_count: 0,
            features: BTreeSet::new(),
            ai_model: "gemini".to_string(),
            include_images: false,
            image_source: ImageSource::None,
            number_of_images: 0,
            discount: None,
        }
    }
}

impl CostRequest {
    pub fn new(word_count: u64) -> Self {
        Self {
            word_count,
            ..Self::default()
        }
    }

    pub fn with_feature(mut self, key: &str) -> Self {
        self.features.insert(key.to_string());
        self
    }

    pub fn with_model(mut self, key: &str) -> Self {
        self.ai_model = key.to_string();
        self
    }

    pub fn with_images(mut self, source: ImageSource, count: u64) -> Self {
        self.include_images = true;
        self.image_source = source;
        self.number_of_images = count;
        self
    }

    pub fn with_discount(mut self, fraction: f64) -> Self {
        self.discount = Some(fraction);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_is_gemini() {
        let request = CostRequest::new(1000);
        assert_eq!(request.ai_model, "gemini");
        assert!(!request.include_images);
    }

    #[test]
    fn test_builder_chain() {
        let request = CostRequest::new(1000)
            .with_feature("brandVoice")
            .with_feature("brandVoice")
            .with_model("openai")
            .with_images(ImageSource::Upload, 3)
            .with_discount(0.25);

        assert_eq!(request.features.len(), 1);
        assert_eq!(request.ai_model, "openai");
        assert_eq!(request.image_source, ImageSource::Upload);
        assert_eq!(request.number_of_images, 3);
        assert_eq!(request.discount, Some(0.25));
    }

    #[test]
    fn test_deserialize_camel_case_payload() {
        let json = r#"{
            "wordCount": 1500,
            "features": ["faqGeneration", "brandVoice"],
            "aiModel": "claude",
            "includeImages": true,
            "imageSource": "stock"
        }"#;

        let request: CostRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.word_count, 1500);
        assert_eq!(request.features.len(), 2);
        assert_eq!(request.ai_model, "claude");
        assert_eq!(request.image_source, ImageSource::Stock);
        assert_eq!(request.number_of_images, 0);
        assert_eq!(request.discount, None);
    }

    #[test]
    fn test_unknown_image_source_degrades_to_none() {
        let json = r#"{ "wordCount": 100, "imageSource": "dalle" }"#;
        let request: CostRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.image_source, ImageSource::None);
    }
}
