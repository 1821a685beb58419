//! # Pricing Engine Module
//!
//! Converts a [`CostRequest`] into an integer credit cost using the static
//! [`PricingConfig`]. Pure functions, no I/O, total over all inputs: the UI
//! calls these on every keystroke, often with half-edited state, and must
//! never crash mid-render. The returned figure is advisory only - the
//! backend performs the authoritative deduction.
//!
//! ## Key Components
//! - [`compute_cost`] - Primary credit cost formula (regenerate/job flows)
//! - [`estimated_cost`] - Pricing calculator formula, kept deliberately distinct
//! - [`cost_breakdown`] - Itemized quote backing both formulas
//! - [`round_half_up`] - The single rounding rule for the whole crate

use serde::Serialize;

use crate::config::PricingConfig;
use crate::request::{AiImageBilling, CostRequest, ImageSource};

/// Itemized result of one price calculation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub chunks: u64,
    /// Word count cost after the model multiplier.
    pub base: u64,
    pub features: u64,
    pub images: u64,
    pub subtotal: u64,
    /// Credits removed by the discount, zero when none applies.
    pub discount: u64,
    pub total: u64,
}

/// Round to the nearest whole credit, ties toward positive infinity.
///
/// Matches JavaScript `Math.round`, which the backend's pricing mirror uses;
/// banker's rounding would drift by one credit on .5 ties. Non-finite or
/// negative input yields 0.
pub fn round_half_up(value: f64) -> u64 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    (value + 0.5).floor() as u64
}

fn word_count_chunks(word_count: u64, chunk_base: u64) -> u64 {
    // A zero base only occurs with a malformed override file; bill it as
    // one chunk per word rather than dividing by zero.
    word_count.div_ceil(chunk_base.max(1))
}

fn features_cost(request: &CostRequest, config: &PricingConfig) -> u64 {
    request
        .features
        .iter()
        .map(|key| config.feature_cost(key))
        .sum()
}

fn images_cost(request: &CostRequest, config: &PricingConfig, billing: AiImageBilling) -> u64 {
    if !request.include_images {
        return 0;
    }
    match request.image_source {
        ImageSource::Stock => config.images.stock.feature_fee,
        ImageSource::Ai => match billing {
            AiImageBilling::FlatFee => config.images.ai.feature_fee,
            AiImageBilling::PerImage => request
                .number_of_images
                .saturating_mul(config.images.ai.per_image_fee),
        },
        ImageSource::Upload => request
            .number_of_images
            .saturating_mul(config.images.upload.per_image_fee),
        ImageSource::None => 0,
    }
}

fn apply_discount(subtotal: u64, discount: Option<f64>) -> u64 {
    let fraction = match discount {
        Some(d) if d.is_finite() => d.clamp(0.0, 1.0),
        _ => 0.0,
    };
    if fraction == 0.0 {
        return subtotal;
    }
    round_half_up(subtotal as f64 * (1.0 - fraction))
}

/// Full itemized quote for a request, with the model-multiplier base
/// formula. `billing` selects which of the two AI-image strategies applies.
pub fn cost_breakdown(
    request: &CostRequest,
    config: &PricingConfig,
    billing: AiImageBilling,
) -> CostBreakdown {
    let chunks = word_count_chunks(request.word_count, config.word_count.base);
    let raw_base = chunks.saturating_mul(config.word_count.cost);
    let multiplier = config.model_multiplier(&request.ai_model);
    let base = round_half_up(raw_base as f64 * multiplier);

    let features = features_cost(request, config);
    let images = images_cost(request, config, billing);

    let subtotal = base.saturating_add(features).saturating_add(images);
    let total = apply_discount(subtotal, request.discount);

    CostBreakdown {
        chunks,
        base,
        features,
        images,
        subtotal,
        discount: subtotal - total,
        total,
    }
}

/// Credit cost for a generation request. This is the formula the regenerate
/// modal and job submission use: chunked word count scaled by the model
/// multiplier, flat fees for stock and AI images, per-image fees for uploads.
pub fn compute_cost(request: &CostRequest, config: &PricingConfig) -> u64 {
    cost_breakdown(request, config, AiImageBilling::FlatFee).total
}

/// Credit estimate as shown on the standalone pricing calculator. Differs
/// from [`compute_cost`] in two ways that are preserved on purpose: the base
/// uses the model's own chunk price instead of a multiplier, and AI images
/// are billed per image. Do not unify the two without product sign-off.
pub fn estimated_cost(request: &CostRequest, config: &PricingConfig) -> u64 {
    estimated_cost_breakdown(request, config).total
}

/// Breakdown variant of [`estimated_cost`] for display surfaces.
pub fn estimated_cost_breakdown(request: &CostRequest, config: &PricingConfig) -> CostBreakdown {
    let chunks = word_count_chunks(request.word_count, config.word_count.base);
    let base = chunks.saturating_mul(config.model_chunk_cost(&request.ai_model));
    let features = features_cost(request, config);
    let images = images_cost(request, config, AiImageBilling::PerImage);
    let subtotal = base.saturating_add(features).saturating_add(images);
    let total = apply_discount(subtotal, request.discount);

    CostBreakdown {
        chunks,
        base,
        features,
        images,
        subtotal,
        discount: subtotal - total,
        total,
    }
}
