//! Threshold-based decision rules for SaaS growth analytics.
//!
//! Every rule is a pure function over a handful of numeric inputs: out of
//! range values are clamped rather than rejected, so none of them can fail.
//! Only loading a [`config::Config`] from disk returns errors.

pub mod confidence;
pub mod config;
pub mod fraud;
pub mod pricing;
pub mod scoring;
pub mod segmentation;

pub use confidence::Confidence;
