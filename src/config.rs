//! # Pricing Configuration Module
//!
//! Static credit pricing tables for word count, feature add-ons, AI models
//! and image options
//!
//! ## Key Components
//! - [`PricingConfig`] - Complete pricing table, immutable after load
//! - [`default_config`] - Built-in pricing table
//! - [`PricingConfig::from_json_file`] - Load a backend-shipped pricing override

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Chunk-based word count pricing. A blog is billed in chunks of `base`
/// words, `cost` credits each.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCountPricing {
    pub base: u64,
    pub cost: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturePricing {
    pub label: String,
    pub cost: u64,
}

/// Per-model pricing. `cost_multiplier` scales the word count base cost.
/// `chunk_cost`, when present, is the separate per-model base price used by
/// the pricing calculator formula (see [`crate::pricing::estimated_cost`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelPricing {
    pub label: String,
    pub cost_multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_cost: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockImagePricing {
    pub feature_fee: u64,
}

/// AI images carry both billing shapes: a flat per-request fee and a
/// per-image price. Which one applies depends on the calling surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiImagePricing {
    pub feature_fee: u64,
    pub per_image_fee: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadImagePricing {
    pub per_image_fee: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePricing {
    pub stock: StockImagePricing,
    pub ai: AiImagePricing,
    pub upload: UploadImagePricing,
}

/// The full pricing table. Loaded once at startup and treated as read-only
/// for the lifetime of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    pub word_count: WordCountPricing,
    pub features: HashMap<String, FeaturePricing>,
    pub ai_models: HashMap<String, ModelPricing>,
    pub images: ImagePricing,
}

impl PricingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse pricing config JSON")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pricing config {}", path.display()))?;
        let config = Self::from_json_str(&contents)?;
        debug!("Loaded pricing config from {}", path.display());
        Ok(config)
    }

    /// Flat surcharge for a feature key. Unknown keys are free, never an
    /// error - callers may hold feature flags the table does not price.
    pub fn feature_cost(&self, key: &str) -> u64 {
        self.features.get(key).map(|f| f.cost).unwrap_or(0)
    }

    /// Cost multiplier for a model key. Unknown models fall back to the
    /// baseline x1; garbage multipliers from a malformed override do too.
    pub fn model_multiplier(&self, key: &str) -> f64 {
        match self.ai_models.get(key) {
            Some(model) if model.cost_multiplier.is_finite() && model.cost_multiplier >= 0.0 => {
                model.cost_multiplier
            }
            Some(model) => {
                debug!(
                    "Ignoring invalid multiplier {} for model '{}'",
                    model.cost_multiplier, key
                );
                1.0
            }
            None => 1.0,
        }
    }

    /// Per-model chunk price for the calculator formula, falling back to the
    /// shared word count price when the model has no dedicated one.
    pub fn model_chunk_cost(&self, key: &str) -> u64 {
        self.ai_models
            .get(key)
            .and_then(|m| m.chunk_cost)
            .unwrap_or(self.word_count.cost)
    }
}

lazy_static::lazy_static! {
    static ref DEFAULT_CONFIG: PricingConfig = build_default_config();
}

/// The built-in pricing table, used when no override file is present.
pub fn default_config() -> &'static PricingConfig {
    &DEFAULT_CONFIG
}

fn build_default_config() -> PricingConfig {
    let mut features = HashMap::new();
    for (key, label, cost) in [
        ("brandVoice", "Brand Voice", 10),
        ("competitorResearch", "Competitor Research", 10),
        ("keywordResearch", "Keyword Research", 10),
        ("internalLinking", "Internal Linking", 5),
        ("faqGeneration", "FAQ Generation", 5),
        ("automaticPosting", "Automatic Posting", 5),
    ] {
        features.insert(
            key.to_string(),
            FeaturePricing {
                label: label.to_string(),
                cost,
            },
        );
    }

    let mut ai_models = HashMap::new();
    for (key, label, cost_multiplier, chunk_cost) in [
        ("gemini", "Gemini", 1.0, Some(10)),
        ("openai", "ChatGPT", 1.5, Some(15)),
        ("claude", "Claude", 2.0, Some(20)),
    ] {
        ai_models.insert(
            key.to_string(),
            ModelPricing {
                label: label.to_string(),
                cost_multiplier,
                chunk_cost,
            },
        );
    }

    PricingConfig {
        word_count: WordCountPricing {
            base: 500,
            cost: 10,
        },
        features,
        ai_models,
        images: ImagePricing {
            stock: StockImagePricing { feature_fee: 10 },
            ai: AiImagePricing {
                feature_fee: 20,
                per_image_fee: 5,
            },
            upload: UploadImagePricing { per_image_fee: 2 },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_tables() {
        let config = default_config();
        assert_eq!(config.word_count.base, 500);
        assert_eq!(config.word_count.cost, 10);
        assert_eq!(config.feature_cost("competitorResearch"), 10);
        assert_eq!(config.model_multiplier("gemini"), 1.0);
        assert_eq!(config.model_multiplier("openai"), 1.5);
        assert_eq!(config.images.stock.feature_fee, 10);
    }

    #[test]
    fn test_unknown_keys_are_free() {
        let config = default_config();
        assert_eq!(config.feature_cost("notAFeature"), 0);
        assert_eq!(config.model_multiplier("gpt-99"), 1.0);
    }

    #[test]
    fn test_invalid_multiplier_falls_back() {
        let mut config = default_config().clone();
        config.ai_models.insert(
            "broken".to_string(),
            ModelPricing {
                label: "Broken".to_string(),
                cost_multiplier: -3.0,
                chunk_cost: None,
            },
        );
        assert_eq!(config.model_multiplier("broken"), 1.0);
    }

    #[test]
    fn test_model_chunk_cost_fallback() {
        let config = default_config();
        assert_eq!(config.model_chunk_cost("claude"), 20);
        assert_eq!(config.model_chunk_cost("unknown"), config.word_count.cost);
    }

    #[test]
    fn test_from_json_str_camel_case() {
        let json = r#"{
            "wordCount": { "base": 250, "cost": 5 },
            "features": {
                "brandVoice": { "label": "Brand Voice", "cost": 8 }
            },
            "aiModels": {
                "gemini": { "label": "Gemini", "costMultiplier": 1.0 },
                "openai": { "label": "ChatGPT", "costMultiplier": 1.5, "chunkCost": 12 }
            },
            "images": {
                "stock": { "featureFee": 10 },
                "ai": { "featureFee": 20, "perImageFee": 5 },
                "upload": { "perImageFee": 2 }
            }
        }"#;

        let config = PricingConfig::from_json_str(json).unwrap();
        assert_eq!(config.word_count.base, 250);
        assert_eq!(config.feature_cost("brandVoice"), 8);
        assert_eq!(config.ai_models["openai"].chunk_cost, Some(12));
        assert_eq!(config.ai_models["gemini"].chunk_cost, None);
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(PricingConfig::from_json_str("not json").is_err());
        assert!(PricingConfig::from_json_str("{}").is_err());
    }
}
