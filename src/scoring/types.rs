use serde::{Serialize, Serializer};
use std::fmt;

use super::config::SegmentThresholds;

/// Subscription plan of the scored user.
///
/// Matching is exact on the lowercase names. Anything else is kept verbatim
/// as [`PlanType::Other`] and never triggers a plan override.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlanType {
    #[default]
    Free,
    Pro,
    Enterprise,
    Other(String),
}

impl PlanType {
    pub fn as_str(&self) -> &str {
        match self {
            PlanType::Free => "free",
            PlanType::Pro => "pro",
            PlanType::Enterprise => "enterprise",
            PlanType::Other(s) => s.as_str(),
        }
    }
}

impl From<&str> for PlanType {
    fn from(s: &str) -> Self {
        match s {
            "free" => PlanType::Free,
            "pro" => PlanType::Pro,
            "enterprise" => PlanType::Enterprise,
            other => PlanType::Other(other.to_string()),
        }
    }
}

impl From<String> for PlanType {
    fn from(s: String) -> Self {
        PlanType::from(s.as_str())
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw usage signals for one user. Out-of-range values are clamped by the
/// engine, never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngagementInput {
    /// Active days in the trailing 30-day window
    pub active_days: i64,
    /// Distinct product features used
    pub features_used: i64,
    pub invites_sent: i64,
    /// Zero or negative means the user logged in today
    pub days_since_last_login: i64,
    pub plan_type: PlanType,
}

impl EngagementInput {
    /// Create an input on the free plan
    pub fn new(
        active_days: i64,
        features_used: i64,
        invites_sent: i64,
        days_since_last_login: i64,
    ) -> Self {
        Self {
            active_days,
            features_used,
            invites_sent,
            days_since_last_login,
            plan_type: PlanType::Free,
        }
    }

    pub fn with_plan(mut self, plan_type: impl Into<PlanType>) -> Self {
        self.plan_type = plan_type.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Segment {
    #[serde(rename = "Power User")]
    PowerUser,
    Engaged,
    Casual,
    #[serde(rename = "At Risk")]
    AtRisk,
    /// A paying (pro) user whose score fell into the at-risk band
    #[serde(rename = "Critical At Risk")]
    CriticalAtRisk,
}

impl Segment {
    /// Base segment for a score, highest band first. Lower bounds are
    /// inclusive.
    pub fn from_score(score: f64, thresholds: &SegmentThresholds) -> Self {
        if score >= thresholds.power_user {
            Segment::PowerUser
        } else if score >= thresholds.engaged {
            Segment::Engaged
        } else if score >= thresholds.casual {
            Segment::Casual
        } else {
            Segment::AtRisk
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Segment::PowerUser => "Power User",
            Segment::Engaged => "Engaged",
            Segment::Casual => "Casual",
            Segment::AtRisk => "At Risk",
            Segment::CriticalAtRisk => "Critical At Risk",
        }
    }

    /// Advisory yearly revenue per user. Critical At Risk keeps the pro-tier
    /// figure since the user is still paying.
    pub fn lifetime_value(&self) -> LifetimeValue {
        let euros_per_year = match self {
            Segment::PowerUser => 1200,
            Segment::Engaged => 600,
            Segment::Casual => 200,
            Segment::AtRisk => 50,
            Segment::CriticalAtRisk => 600,
        };
        LifetimeValue { euros_per_year }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Segment-indexed LTV estimate, rendered as `€1200/year`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifetimeValue {
    pub euros_per_year: u32,
}

impl fmt::Display for LifetimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "€{}/year", self.euros_per_year)
    }
}

impl Serialize for LifetimeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
