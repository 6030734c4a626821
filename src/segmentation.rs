//! Churn-status classification by days since last login.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActivityStatus {
    #[serde(rename = "Highly Active")]
    HighlyActive,
    Active,
    #[serde(rename = "At Risk")]
    AtRisk,
    Churned,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ActivityStatus::HighlyActive => "Highly Active",
            ActivityStatus::Active => "Active",
            ActivityStatus::AtRisk => "At Risk",
            ActivityStatus::Churned => "Churned",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityClassification {
    pub status: ActivityStatus,
    pub action: &'static str,
}

/// Classify a user by recency of their last login.
///
/// Fractional days are accepted: anything under one day counts as highly
/// active. The at-risk band includes day 30. NaN is treated as churned.
pub fn classify_user_status(days_since_last_login: f64) -> ActivityClassification {
    let (status, action) = if days_since_last_login < 1.0 {
        (ActivityStatus::HighlyActive, "Offer special promotion")
    } else if days_since_last_login < 7.0 {
        (ActivityStatus::Active, "No action needed")
    } else if days_since_last_login <= 30.0 {
        (ActivityStatus::AtRisk, "Send re-engagement email")
    } else {
        (ActivityStatus::Churned, "Add to win-back campaign")
    };

    ActivityClassification { status, action }
}
