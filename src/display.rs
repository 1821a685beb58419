//! # Quote Display Module
//!
//! Terminal and JSON formatting for quotes and pricing tables
//!
//! ## Key Components
//! - [`format_credits`] - Render an integer credit amount for users
//! - [`format_quote_table`] - Itemized quote for terminal output
//! - [`QuoteOutput`] - JSON structure for `--json` output

use serde::Serialize;

use crate::config::PricingConfig;
use crate::pricing::CostBreakdown;
use crate::request::CostRequest;

/// JSON shape emitted by `quote --json`, camelCase to match the frontend.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutput {
    pub request: CostRequest,
    pub breakdown: CostBreakdown,
    pub formatted: String,
}

pub fn format_credits(credits: u64) -> String {
    if credits == 1 {
        "1 credit".to_string()
    } else {
        format!("{} credits", credits)
    }
}

pub fn format_quote_table(breakdown: &CostBreakdown, request: &CostRequest) -> String {
    let gray = "\x1b[90m";
    let cyan = "\x1b[36m";
    let green = "\x1b[32m";
    let reset = "\x1b[0m";

    let mut output = String::new();
    output.push_str(&format!("{cyan}Quote for {} words ({}){reset}\n", request.word_count, request.ai_model));
    output.push_str(&format!("{gray}─────────────────────────────────{reset}\n"));
    output.push_str(&format!(
        "  Content ({} chunk{})     {:>6}\n",
        breakdown.chunks,
        if breakdown.chunks == 1 { " " } else { "s" },
        breakdown.base
    ));
    output.push_str(&format!("  Feature add-ons        {:>6}\n", breakdown.features));
    output.push_str(&format!("  Images                 {:>6}\n", breakdown.images));
    if breakdown.discount > 0 {
        output.push_str(&format!("  Subtotal               {:>6}\n", breakdown.subtotal));
        output.push_str(&format!("  Discount              -{:>6}\n", breakdown.discount));
    }
    output.push_str(&format!("{gray}─────────────────────────────────{reset}\n"));
    output.push_str(&format!(
        "{green}  Total  {:>23}{reset}\n",
        format_credits(breakdown.total)
    ));
    output
}

/// Feature pricing table, sorted by key for stable output.
pub fn format_features_table(config: &PricingConfig) -> String {
    let mut rows: Vec<_> = config.features.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut output = String::new();
    output.push_str(&format!("{:<22} {:<22} {:>7}\n", "Key", "Label", "Credits"));
    for (key, feature) in rows {
        output.push_str(&format!(
            "{:<22} {:<22} {:>7}\n",
            key, feature.label, feature.cost
        ));
    }
    output
}

/// AI model pricing table, sorted by key for stable output.
pub fn format_models_table(config: &PricingConfig) -> String {
    let mut rows: Vec<_> = config.ai_models.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<12} {:>10} {:>11}\n",
        "Key", "Label", "Multiplier", "Chunk price"
    ));
    for (key, model) in rows {
        let chunk = model
            .chunk_cost
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:<12} {:<12} {:>10.2} {:>11}\n",
            key, model.label, model.cost_multiplier, chunk
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_config;
    use crate::pricing::cost_breakdown;
    use crate::request::{AiImageBilling, CostRequest};

    #[test]
    fn test_format_credits_singular() {
        assert_eq!(format_credits(1), "1 credit");
        assert_eq!(format_credits(0), "0 credits");
        assert_eq!(format_credits(23), "23 credits");
    }

    #[test]
    fn test_quote_table_contains_total() {
        let request = CostRequest::new(1000).with_discount(0.25);
        let breakdown = cost_breakdown(&request, default_config(), AiImageBilling::FlatFee);
        let table = format_quote_table(&breakdown, &request);
        assert!(table.contains("15 credits")); // round(20 * 0.75)
        assert!(table.contains("Discount"));
    }

    #[test]
    fn test_tables_list_all_entries() {
        let config = default_config();
        let features = format_features_table(config);
        for key in config.features.keys() {
            assert!(features.contains(key.as_str()));
        }
        let models = format_models_table(config);
        assert!(models.contains("gemini"));
        assert!(models.contains("1.00"));
    }
}
