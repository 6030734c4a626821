//! Engagement scoring: a weighted 0-100 score over usage signals, mapped to
//! a segment, an advisory action and priority, and an LTV estimate.

pub mod config;
pub mod engine;
pub mod factors;
pub mod types;
pub mod validation;

pub use config::*;
pub use engine::{calculate_score, rank, score, RankedUser, ScoreBreakdown, ScoringResult};
pub use factors::RangeOp;
pub use types::{EngagementInput, LifetimeValue, PlanType, Segment};
pub use validation::validate_scoring;
