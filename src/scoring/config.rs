use serde::{Deserialize, Serialize};

/// Engagement scoring configuration.
///
/// The defaults are the canonical model: weights 40/35/25 over 30 active
/// days, 10 features and 5 invites, four recency bands, and segment cut-offs
/// at 80/60/40. Every field may be omitted from YAML and falls back to its
/// default.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   weights: { activity: 50, features: 30, viral: 20 }
///   invite_cap: 10
///   recency:
///     - { name: today, range: "<=0", bonus: 10 }
///     - { name: lapsed, range: ">=15", bonus: -10 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Points each signal contributes at its cap; must sum to 100
    pub weights: Weights,

    /// Upper clamp for active days (trailing window length)
    pub max_active_days: i64,

    /// Upper clamp for distinct features used
    pub max_features: i64,

    /// Invites beyond this count add nothing to the score
    pub invite_cap: i64,

    /// Recency bands over days since last login. First match wins; no match
    /// means a bonus of 0.
    pub recency: Vec<RecencyBand>,

    /// Lower bounds (inclusive) of the segment bands
    pub segments: SegmentThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            max_active_days: 30,
            max_features: 10,
            invite_cap: 5,
            recency: vec![
                RecencyBand::new("today", "<=0", 10.0),
                RecencyBand::new("this week", "1-7", 5.0),
                RecencyBand::new("last two weeks", "8-14", 0.0),
                RecencyBand::new("lapsed", ">=15", -10.0),
            ],
            segments: SegmentThresholds::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Weights {
    pub activity: f64,
    pub features: f64,
    pub viral: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            activity: 40.0,
            features: 35.0,
            viral: 25.0,
        }
    }
}

impl Weights {
    pub fn total(&self) -> f64 {
        self.activity + self.features + self.viral
    }
}

/// Recency band.
///
/// Range format: "<N", "<=N", ">N", ">=N", "N" or "N-M" (inclusive), where
/// N may be negative.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RecencyBand {
    /// Label reported in the score breakdown
    pub name: String,

    /// Range expression over days since last login (e.g., "<=0", "1-7")
    pub range: String,

    /// Points added to the raw score (may be negative)
    pub bonus: f64,
}

impl RecencyBand {
    pub fn new(name: &str, range: &str, bonus: f64) -> Self {
        Self {
            name: name.to_string(),
            range: range.to_string(),
            bonus,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentThresholds {
    pub power_user: f64,
    pub engaged: f64,
    pub casual: f64,
}

impl Default for SegmentThresholds {
    fn default() -> Self {
        Self {
            power_user: 80.0,
            engaged: 60.0,
            casual: 40.0,
        }
    }
}
