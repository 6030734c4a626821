//! Recommends the smallest plan that covers current usage with room to grow.

use serde::Serialize;
use std::fmt;

use crate::confidence::Confidence;

/// Free plan: 5 projects, 1 GB, a single user
pub const FREE_MAX_PROJECTS: u32 = 5;
pub const FREE_MAX_STORAGE_GB: f64 = 1.0;
pub const FREE_MAX_TEAM: u32 = 1;

/// Starter plan: 20 projects, 10 GB, 3 users
pub const STARTER_MAX_PROJECTS: u32 = 20;
pub const STARTER_MAX_STORAGE_GB: f64 = 10.0;
pub const STARTER_MAX_TEAM: u32 = 3;

/// Pro covers up to 10 users; larger teams need Enterprise
pub const PRO_MAX_TEAM: u32 = 10;
/// Monthly support tickets that call for dedicated support
pub const ENTERPRISE_SUPPORT_TICKETS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Plan {
    Free,
    Starter,
    Pro,
    Enterprise,
    /// Usage matched no tier (e.g. unreadable storage figures)
    #[serde(rename = "Manual review")]
    ManualReview,
}

impl Plan {
    /// List price in EUR per month, if the plan has one
    pub fn monthly_price(&self) -> Option<u32> {
        match self {
            Plan::Free => Some(0),
            Plan::Starter => Some(12),
            Plan::Pro => Some(29),
            Plan::Enterprise => Some(99),
            Plan::ManualReview => None,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Plan::Free => "Free",
            Plan::Starter => "Starter",
            Plan::Pro => "Pro",
            Plan::Enterprise => "Enterprise",
            Plan::ManualReview => "Manual review",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingRecommendation {
    pub recommended_plan: Plan,
    pub reasoning: &'static str,
    pub upsell_trigger: &'static str,
    pub confidence: Confidence,
}

pub fn recommend_pricing_tier(
    projects_created: u32,
    storage_used_gb: f64,
    team_members: u32,
    support_tickets_last_month: u32,
) -> PricingRecommendation {
    let fits_free = projects_created <= FREE_MAX_PROJECTS
        && storage_used_gb <= FREE_MAX_STORAGE_GB
        && team_members <= FREE_MAX_TEAM;
    let needs_enterprise =
        team_members > PRO_MAX_TEAM || support_tickets_last_month >= ENTERPRISE_SUPPORT_TICKETS;
    let exceeds_starter = projects_created > STARTER_MAX_PROJECTS
        || storage_used_gb > STARTER_MAX_STORAGE_GB
        || team_members > STARTER_MAX_TEAM;
    let exceeds_free = projects_created > FREE_MAX_PROJECTS
        || storage_used_gb > FREE_MAX_STORAGE_GB
        || team_members > FREE_MAX_TEAM;

    let (recommended_plan, reasoning, upsell_trigger, confidence) = if fits_free {
        (
            Plan::Free,
            "Current usage fits Free plan limits",
            "No action needed",
            Confidence::High,
        )
    } else if needs_enterprise {
        (
            Plan::Enterprise,
            "Large team or high support needs require Enterprise",
            "Offer dedicated account manager",
            Confidence::High,
        )
    } else if exceeds_starter {
        (
            Plan::Pro,
            "Usage exceeds Starter limits (projects, storage or team). Pro offers more capacity.",
            "Pro plan benefits presentation & 1-month free trial",
            Confidence::Medium,
        )
    } else if exceeds_free {
        (
            Plan::Starter,
            "Usage exceeds Free plan limits. Starter offers necessary growth margin.",
            "Starter plan trial or discount offer",
            Confidence::High,
        )
    } else {
        (
            Plan::ManualReview,
            "Usage pattern does not fit any predefined tier, requires manual review.",
            "Manual review by Sales/Growth team",
            Confidence::Low,
        )
    };

    PricingRecommendation {
        recommended_plan,
        reasoning,
        upsell_trigger,
        confidence,
    }
}
