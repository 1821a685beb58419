//! # GenWrite Credits
//!
//! Credit cost estimation for GenWrite blog generation
//!
//! Every surface that quotes a price - the regenerate modal, the pricing
//! calculator, job submission - goes through this crate so the same inputs
//! always produce the same number. Estimates are advisory; the backend owns
//! the actual deduction.
//!
//! ## Key Components
//! - [`pricing::compute_cost`] - Primary credit cost formula
//! - [`pricing::estimated_cost`] - Pricing calculator formula
//! - [`config::PricingConfig`] - Static pricing tables
//! - [`request::CostRequest`] - Per-calculation parameters

pub mod config;
pub mod display;
pub mod pricing;
pub mod request;

pub use config::{default_config, PricingConfig};
pub use pricing::{compute_cost, cost_breakdown, estimated_cost, CostBreakdown};
pub use request::{AiImageBilling, CostRequest, ImageSource};
