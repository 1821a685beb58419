//! # Commands Module
//!
//! Command handlers for quote, features, and models operations
//!
//! ## Key Components
//! - [`handle_quote_command`] - Compute and print a credit quote
//! - [`handle_features_command`] - Print the feature add-on pricing table
//! - [`handle_models_command`] - Print the AI model pricing table
//! - [`load_pricing_config`] - Resolve which pricing table is active

use std::path::{Path, PathBuf};

use anyhow::Result;
use log::debug;

use genwrite_credits::config::{default_config, PricingConfig};
use genwrite_credits::display::{
    format_credits, format_features_table, format_models_table, format_quote_table, QuoteOutput,
};
use genwrite_credits::pricing::{cost_breakdown, estimated_cost_breakdown};
use genwrite_credits::request::{AiImageBilling, CostRequest, ImageSource};

/// Fixed Cost Cutter discount fraction, mirrored from the backend.
const COST_CUTTER_DISCOUNT: f64 = 0.25;

fn user_override_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("genwrite").join("pricing.json"))
}

/// Resolve the pricing table: an explicit `--config` path wins, then a
/// user-level override at `<config dir>/genwrite/pricing.json`, then the
/// built-in default table. An explicit path that fails to load is an error;
/// a broken user override is skipped with a debug note so quoting still works.
pub fn load_pricing_config(explicit: Option<&str>) -> Result<PricingConfig> {
    if let Some(path) = explicit {
        return PricingConfig::from_json_file(Path::new(path));
    }

    if let Some(path) = user_override_path() {
        if path.exists() {
            match PricingConfig::from_json_file(&path) {
                Ok(config) => return Ok(config),
                Err(e) => debug!("Ignoring user pricing override: {e:#}"),
            }
        }
    }

    debug!("Using built-in pricing table");
    Ok(default_config().clone())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_quote_command(
    config: &PricingConfig,
    words: u64,
    features: &[String],
    model: &str,
    images: Option<ImageSource>,
    image_count: u64,
    billing: AiImageBilling,
    cost_cutter: bool,
    discount: Option<f64>,
    estimated: bool,
    json: bool,
) -> Result<()> {
    let mut request = CostRequest::new(words).with_model(model);
    for feature in features {
        request.features.insert(feature.clone());
    }
    if let Some(source) = images {
        request = request.with_images(source, image_count);
    }
    if let Some(fraction) = discount {
        request = request.with_discount(fraction);
    } else if cost_cutter {
        request = request.with_discount(COST_CUTTER_DISCOUNT);
    }

    debug!("Quoting request: {request:?}");

    let breakdown = if estimated {
        estimated_cost_breakdown(&request, config)
    } else {
        cost_breakdown(&request, config, billing)
    };

    if json {
        let output = QuoteOutput {
            formatted: format_credits(breakdown.total),
            breakdown,
            request,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", format_quote_table(&breakdown, &request));
    }

    Ok(())
}

pub fn handle_features_command(config: &PricingConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.features)?);
    } else {
        print!("{}", format_features_table(config));
    }
    Ok(())
}

pub fn handle_models_command(config: &PricingConfig, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&config.ai_models)?);
    } else {
        print!("{}", format_models_table(config));
    }
    Ok(())
}
