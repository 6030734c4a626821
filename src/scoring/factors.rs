use anyhow::{bail, Result};

/// A comparison over a signed day count, parsed from band expressions like
/// `"<=0"`, `"1-7"` or `">=15"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOp {
    LessThan(i64),
    LessEqual(i64),
    GreaterThan(i64),
    GreaterEqual(i64),
    Equal(i64),
    Between(i64, i64), // Inclusive range: N-M
}

impl RangeOp {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("Empty range expression");
        }

        if let Some(val) = s.strip_prefix(">=") {
            Ok(RangeOp::GreaterEqual(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix("<=") {
            Ok(RangeOp::LessEqual(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix('>') {
            Ok(RangeOp::GreaterThan(val.trim().parse()?))
        } else if let Some(val) = s.strip_prefix('<') {
            Ok(RangeOp::LessThan(val.trim().parse()?))
        } else if let Some((low, high)) = split_between(s) {
            let low: i64 = low.trim().parse()?;
            let high: i64 = high.trim().parse()?;
            if low > high {
                bail!("Range start {} is greater than end {}", low, high);
            }
            Ok(RangeOp::Between(low, high))
        } else {
            Ok(RangeOp::Equal(s.parse()?))
        }
    }

    pub fn matches(&self, value: i64) -> bool {
        match self {
            RangeOp::LessThan(n) => value < *n,
            RangeOp::LessEqual(n) => value <= *n,
            RangeOp::GreaterThan(n) => value > *n,
            RangeOp::GreaterEqual(n) => value >= *n,
            RangeOp::Equal(n) => value == *n,
            RangeOp::Between(low, high) => value >= *low && value <= *high,
        }
    }
}

/// Split "N-M" at the separating dash. A leading minus belongs to the lower
/// bound, so "-5" is a single value and "-5-0" splits into "-5" and "0".
fn split_between(s: &str) -> Option<(&str, &str)> {
    let start = usize::from(s.starts_with('-'));
    let idx = s[start..].find('-')? + start;
    Some((&s[..idx], &s[idx + 1..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_less_equal() {
        let range = RangeOp::parse("<=0").unwrap();
        assert!(range.matches(-3));
        assert!(range.matches(0));
        assert!(!range.matches(1));
    }

    #[test]
    fn test_parse_range_less_than() {
        let range = RangeOp::parse("<7").unwrap();
        assert!(range.matches(6));
        assert!(!range.matches(7));
    }

    #[test]
    fn test_parse_range_greater_than() {
        let range = RangeOp::parse("> 14").unwrap();
        assert!(!range.matches(14));
        assert!(range.matches(15));
    }

    #[test]
    fn test_parse_range_greater_equal() {
        let range = RangeOp::parse(">=15").unwrap();
        assert!(!range.matches(14));
        assert!(range.matches(15));
        assert!(range.matches(i64::MAX));
    }

    #[test]
    fn test_parse_range_between_inclusive() {
        let range = RangeOp::parse("8-14").unwrap();
        assert_eq!(range, RangeOp::Between(8, 14));
        assert!(!range.matches(7));
        assert!(range.matches(8));
        assert!(range.matches(14));
        assert!(!range.matches(15));
    }

    #[test]
    fn test_parse_negative_values() {
        assert_eq!(RangeOp::parse("-5").unwrap(), RangeOp::Equal(-5));
        assert_eq!(RangeOp::parse("-5-0").unwrap(), RangeOp::Between(-5, 0));
        assert_eq!(RangeOp::parse("-10--2").unwrap(), RangeOp::Between(-10, -2));
    }

    #[test]
    fn test_parse_range_equal() {
        let range = RangeOp::parse("0").unwrap();
        assert!(range.matches(0));
        assert!(!range.matches(1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(RangeOp::parse("").is_err());
        assert!(RangeOp::parse("soon").is_err());
        assert!(RangeOp::parse(">=x").is_err());
        assert!(RangeOp::parse("1-2-3").is_err());
    }

    #[test]
    fn test_parse_rejects_inverted_between() {
        let err = RangeOp::parse("14-8").unwrap_err();
        assert!(err.to_string().contains("greater than"));
    }
}
