//! # CLI Module
//!
//! Command-line interface definitions and argument parsing for genwrite-credits
//!
//! ## Key Components
//! - [`Args`] - Main CLI arguments structure
//! - [`Commands`] - Subcommand definitions

use clap::{Parser, Subcommand};

use genwrite_credits::request::{AiImageBilling, ImageSource};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Quote the credit cost of a generation request
    Quote {
        /// Desired output length in words
        #[arg(long, default_value = "1000")]
        words: u64,

        /// Feature add-on key (repeatable), e.g. brandVoice, faqGeneration
        #[arg(long = "feature")]
        features: Vec<String>,

        /// AI model key
        #[arg(long, default_value = "gemini")]
        model: String,

        /// Include images, priced by source
        #[arg(long, value_enum)]
        images: Option<ImageSource>,

        /// Number of images (upload and per-image AI billing)
        #[arg(long, default_value = "0")]
        image_count: u64,

        /// AI-image billing strategy
        #[arg(long, value_enum, default_value = "flat-fee")]
        billing: AiImageBilling,

        /// Apply the Cost Cutter 25% discount
        #[arg(long)]
        cost_cutter: bool,

        /// Custom discount fraction in [0, 1), overrides --cost-cutter
        #[arg(long)]
        discount: Option<f64>,

        /// Use the pricing calculator formula instead of the job formula
        #[arg(long)]
        estimated: bool,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show the feature add-on pricing table
    Features {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
    /// Show the AI model pricing table
    Models {
        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "GenWrite credit estimator - quote blog generation costs"
)]
pub struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a pricing config JSON file (overrides the built-in table)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
