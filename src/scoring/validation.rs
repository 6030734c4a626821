use super::config::ScoringConfig;
use super::factors::RangeOp;

const WEIGHT_TOTAL: f64 = 100.0;
const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Validate a scoring configuration before use.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    // Weights: each non-negative, together exactly 100
    let weights = [
        ("activity", config.weights.activity),
        ("features", config.weights.features),
        ("viral", config.weights.viral),
    ];
    for (name, weight) in weights {
        if !weight.is_finite() || weight < 0.0 {
            errors.push(format!(
                "scoring.weights.{}: must be a non-negative number (got {})",
                name, weight
            ));
        }
    }
    let total = config.weights.total();
    if total.is_finite() && (total - WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
        errors.push(format!("scoring.weights: must sum to 100 (got {})", total));
    }

    // Clamps and caps divide the raw signals, so they must be positive
    let limits = [
        ("max_active_days", config.max_active_days),
        ("max_features", config.max_features),
        ("invite_cap", config.invite_cap),
    ];
    for (name, limit) in limits {
        if limit <= 0 {
            errors.push(format!("scoring.{}: must be positive (got {})", name, limit));
        }
    }

    // Recency bands
    for (i, band) in config.recency.iter().enumerate() {
        if let Err(e) = RangeOp::parse(&band.range) {
            errors.push(format!(
                "scoring.recency[{}].range: invalid '{}' - {}",
                i, band.range, e
            ));
        }
        if !band.bonus.is_finite() {
            errors.push(format!(
                "scoring.recency[{}].bonus: must be a finite number",
                i
            ));
        }
    }

    // Segment thresholds: 0 <= casual < engaged < power_user <= 100
    let segments = &config.segments;
    let ordered = 0.0 <= segments.casual
        && segments.casual < segments.engaged
        && segments.engaged < segments.power_user
        && segments.power_user <= 100.0;
    if !ordered {
        errors.push(format!(
            "scoring.segments: expected 0 <= casual < engaged < power_user <= 100 (got {}, {}, {})",
            segments.casual, segments.engaged, segments.power_user
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{RecencyBand, SegmentThresholds, Weights};

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_custom_valid_config() {
        let config = ScoringConfig {
            weights: Weights {
                activity: 50.0,
                features: 30.0,
                viral: 20.0,
            },
            invite_cap: 10,
            recency: vec![RecencyBand::new("today", "<=0", 20.0)],
            ..ScoringConfig::default()
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_100() {
        let config = ScoringConfig {
            weights: Weights {
                activity: 50.0,
                ..Weights::default()
            },
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("must sum to 100"));
    }

    #[test]
    fn test_negative_weight() {
        let config = ScoringConfig {
            weights: Weights {
                activity: -10.0,
                features: 60.0,
                viral: 50.0,
            },
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.weights.activity"));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let config = ScoringConfig {
            invite_cap: 0,
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.invite_cap"));
    }

    #[test]
    fn test_invalid_recency_band() {
        let config = ScoringConfig {
            recency: vec![
                RecencyBand::new("today", "<=0", 10.0),
                RecencyBand::new("broken", "soon", 5.0),
            ],
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.recency[1].range"));
    }

    #[test]
    fn test_unordered_segments() {
        let config = ScoringConfig {
            segments: SegmentThresholds {
                power_user: 60.0,
                engaged: 80.0,
                casual: 40.0,
            },
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.segments"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            max_active_days: 0,                                    // Error 1
            recency: vec![RecencyBand::new("bad", "x", f64::NAN)], // Errors 2, 3
            segments: SegmentThresholds {
                power_user: 120.0, // Error 4
                ..SegmentThresholds::default()
            },
            ..ScoringConfig::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
