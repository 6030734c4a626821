use serde::Serialize;
use tracing::{trace, warn};

use super::config::{RecencyBand, ScoringConfig};
use super::factors::RangeOp;
use super::types::{EngagementInput, LifetimeValue, PlanType, Segment};

const MAX_SCORE: f64 = 100.0;

const FREE_UPSELL_ACTION: &str = "High priority upsell to premium";
const FREE_UPSELL_PRIORITY: &str = "High priority upsell";
const PRO_CHURN_ACTION: &str = "CRITICAL - Paying customer at risk";
const PRO_CHURN_PRIORITY: &str = "CRITICAL churn prevention";

/// Per-signal contributions before clamping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub activity: f64,
    pub features: f64,
    pub viral: f64,
    pub recency_bonus: f64,
    /// Name of the matched recency band, if any
    pub recency_band: Option<String>,
}

impl ScoreBreakdown {
    /// Sum of all contributions, before the [0, 100] clamp
    pub fn raw_total(&self) -> f64 {
        self.activity + self.features + self.viral + self.recency_bonus
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub segment: Segment,
    pub action: &'static str,
    pub priority: &'static str,
    pub lifetime_value_estimate: LifetimeValue,
}

/// Score one user with the default model.
///
/// ```
/// use growth_rules::scoring::{score, Segment};
///
/// let result = score(28, 9, 4, 2, "free");
/// assert_eq!(result.segment, Segment::PowerUser);
/// assert_eq!(result.lifetime_value_estimate.to_string(), "€1200/year");
/// ```
pub fn score(
    active_days: i64,
    features_used: i64,
    invites_sent: i64,
    days_since_last_login: i64,
    plan_type: impl Into<PlanType>,
) -> ScoringResult {
    let input = EngagementInput::new(active_days, features_used, invites_sent, days_since_last_login)
        .with_plan(plan_type);
    calculate_score(&input, &ScoringConfig::default())
}

pub fn calculate_score(input: &EngagementInput, config: &ScoringConfig) -> ScoringResult {
    let active_days = clamp_signal(input.active_days, config.max_active_days);
    let features_used = clamp_signal(input.features_used, config.max_features);
    // Stored value has no ceiling; only its contribution is capped
    let invites_sent = input.invites_sent.max(0);
    let scored_invites = clamp_signal(invites_sent, config.invite_cap);

    let (recency_bonus, recency_band) =
        recency_bonus(input.days_since_last_login, &config.recency);

    let breakdown = ScoreBreakdown {
        activity: ratio(active_days, config.max_active_days) * config.weights.activity,
        features: ratio(features_used, config.max_features) * config.weights.features,
        viral: ratio(scored_invites, config.invite_cap) * config.weights.viral,
        recency_bonus,
        recency_band,
    };
    let total_score = breakdown.raw_total().clamp(0.0, MAX_SCORE);

    let base = Segment::from_score(total_score, &config.segments);
    let (mut action, mut priority) = playbook(base);
    let mut segment = base;

    // Plan overrides. The base bands are disjoint, so at most one applies;
    // enterprise and unknown plans are never overridden.
    match (&input.plan_type, base) {
        (PlanType::Free, Segment::PowerUser) => {
            action = FREE_UPSELL_ACTION;
            priority = FREE_UPSELL_PRIORITY;
        }
        (PlanType::Pro, Segment::AtRisk) => {
            segment = Segment::CriticalAtRisk;
            action = PRO_CHURN_ACTION;
            priority = PRO_CHURN_PRIORITY;
        }
        _ => {}
    }

    trace!(
        plan = %input.plan_type,
        raw = breakdown.raw_total(),
        total = total_score,
        segment = %segment,
        "scored engagement"
    );

    ScoringResult {
        total_score,
        breakdown,
        segment,
        action,
        priority,
        lifetime_value_estimate: segment.lifetime_value(),
    }
}

/// Base action and priority for each band
fn playbook(segment: Segment) -> (&'static str, &'static str) {
    match segment {
        Segment::PowerUser => ("Upsell to premium + Request testimonial", "High value"),
        Segment::Engaged => ("Share new features + Encourage invites", "Retention focus"),
        Segment::Casual => ("Send educational content + Usage tips", "Activation needed"),
        Segment::AtRisk => ("Launch re-engagement campaign immediately", "Churn prevention"),
        Segment::CriticalAtRisk => (PRO_CHURN_ACTION, PRO_CHURN_PRIORITY),
    }
}

fn clamp_signal(value: i64, max: i64) -> i64 {
    value.min(max).max(0)
}

fn ratio(value: i64, max: i64) -> f64 {
    if max > 0 {
        value as f64 / max as f64
    } else {
        0.0
    }
}

fn recency_bonus(days: i64, bands: &[RecencyBand]) -> (f64, Option<String>) {
    for band in bands {
        match RangeOp::parse(&band.range) {
            Ok(range) if range.matches(days) => return (band.bonus, Some(band.name.clone())),
            Ok(_) => {}
            Err(e) => warn!(range = %band.range, error = %e, "skipping unparseable recency band"),
        }
    }
    (0.0, None)
}

/// A scored user, borrowed from the ranked batch
#[derive(Debug, Clone)]
pub struct RankedUser<'a> {
    pub id: &'a str,
    pub result: ScoringResult,
}

/// Score a batch of users and order them for outreach: highest score first,
/// ties keep their input order.
pub fn rank<'a>(users: &'a [(String, EngagementInput)], config: &ScoringConfig) -> Vec<RankedUser<'a>> {
    let mut ranked: Vec<_> = users
        .iter()
        .map(|(id, input)| RankedUser {
            id: id.as_str(),
            result: calculate_score(input, config),
        })
        .collect();

    // Stable sort, so equal scores stay in input order
    ranked.sort_by(|a, b| {
        b.result
            .total_score
            .partial_cmp(&a.result.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    ranked
}
