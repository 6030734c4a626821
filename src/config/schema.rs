use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Engagement scoring model; the built-in model when absent
    #[serde(default)]
    pub scoring: Option<ScoringConfig>,

    /// Minimum visitors per variant before an A/B test is read
    #[serde(default)]
    pub ab_test_minimum_sample_size: Option<u64>,
}

impl Config {
    /// Scoring model to use: the configured one, or the default
    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn effective_minimum_sample_size(&self) -> u64 {
        self.ab_test_minimum_sample_size
            .unwrap_or(crate::ab_test::DEFAULT_MINIMUM_SAMPLE_SIZE)
    }
}
