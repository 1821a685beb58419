//! # GenWrite Credit Estimator CLI
//!
//! Quotes blog-generation credit costs from the command line
//!
//! ## Key Components
//! - [`main`] - Argument parsing, logging setup, and command dispatch

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Args, Commands};
use crate::commands::{
    handle_features_command, handle_models_command, handle_quote_command, load_pricing_config,
};

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    }

    let config = load_pricing_config(args.config.as_deref())?;

    match args.command {
        Some(Commands::Quote {
            words,
            features,
            model,
            images,
            image_count,
            billing,
            cost_cutter,
            discount,
            estimated,
            json,
        }) => handle_quote_command(
            &config,
            words,
            &features,
            &model,
            images,
            image_count,
            billing,
            cost_cutter,
            discount,
            estimated,
            json,
        ),
        Some(Commands::Features { json }) => handle_features_command(&config, json),
        Some(Commands::Models { json }) => handle_models_command(&config, json),
        // Bare invocation quotes the default request
        None => handle_quote_command(
            &config,
            1000,
            &[],
            "gemini",
            None,
            0,
            genwrite_credits::request::AiImageBilling::FlatFee,
            false,
            None,
            false,
            false,
        ),
    }
}
