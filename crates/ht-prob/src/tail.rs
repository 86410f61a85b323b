//! Tail conventions for p-values and critical values.
//!
//! Thin compositions over the [`Family`] facade; nothing here touches the
//! integrators directly.

use ht_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::Family;

/// Which tail of the distribution a test statistic is judged against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tail {
    Left,
    Right,
    TwoSided,
}

impl Tail {
    /// Parse a wire tag (`"left"`, `"right"`, `"two-sided"`).
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "left" => Ok(Tail::Left),
            "right" => Ok(Tail::Right),
            "two-sided" => Ok(Tail::TwoSided),
            other => Err(Error::Validation(format!(
                "unknown tail tag {:?} (expected \"left\", \"right\", or \"two-sided\")",
                other
            ))),
        }
    }

    /// Wire tag for this tail.
    pub fn tag(&self) -> &'static str {
        match self {
            Tail::Left => "left",
            Tail::Right => "right",
            Tail::TwoSided => "two-sided",
        }
    }
}

/// P-value of an observed statistic under `family`.
///
/// Two-sided doubles the smaller tail and caps at 1; for the asymmetric
/// chi-square this is the usual doubled-tail convention, not an
/// equal-density interval.
pub fn p_value(stat: f64, family: Family, tail: Tail) -> f64 {
    let lower = family.cdf(stat);
    match tail {
        Tail::Left => lower,
        Tail::Right => 1.0 - lower,
        Tail::TwoSided => (2.0 * lower.min(1.0 - lower)).min(1.0),
    }
}

/// Critical value at significance level `alpha`.
///
/// Right-tailed tests reject above the returned value, left-tailed below
/// it; two-sided reports the upper bound `ppf(1 − alpha/2)` (symmetric
/// families mirror it; chi-square callers pair it with `ppf(alpha/2)`).
pub fn critical_value(alpha: f64, family: Family, tail: Tail) -> f64 {
    match tail {
        Tail::Left => family.ppf(alpha),
        Tail::Right => family.ppf(1.0 - alpha),
        Tail::TwoSided => family.ppf(1.0 - 0.5 * alpha),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for tail in [Tail::Left, Tail::Right, Tail::TwoSided] {
            assert_eq!(Tail::from_tag(tail.tag()).unwrap(), tail);
        }
        assert!(Tail::from_tag("both").is_err());
    }

    #[test]
    fn test_right_tail_chi() {
        // P(chi²(24) > 36.415) ≈ 0.05
        let family = Family::ChiSquared { df: 24.0 };
        let p = p_value(36.415, family, Tail::Right);
        assert!((p - 0.05).abs() < 0.01, "got {}", p);
    }

    #[test]
    fn test_left_and_right_sum_to_one() {
        let family = Family::StudentT { df: 10.0 };
        let l = p_value(1.3, family, Tail::Left);
        let r = p_value(1.3, family, Tail::Right);
        assert!((l + r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_two_sided_normal() {
        let p = p_value(1.96, Family::Normal, Tail::TwoSided);
        assert!((p - 0.05).abs() < 2e-3, "got {}", p);
        // A statistic at the center has no evidence either way.
        let center = p_value(0.0, Family::Normal, Tail::TwoSided);
        assert!((center - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_two_sided_is_capped() {
        let p = p_value(0.01, Family::StudentT { df: 5.0 }, Tail::TwoSided);
        assert!(p <= 1.0);
    }

    #[test]
    fn test_critical_values() {
        let z = critical_value(0.05, Family::Normal, Tail::TwoSided);
        assert!((z - 1.96).abs() < 0.01, "got {}", z);

        let chi = critical_value(0.05, Family::ChiSquared { df: 24.0 }, Tail::Right);
        assert!((chi - 36.415).abs() < 0.1, "got {}", chi);

        let left = critical_value(0.05, Family::Normal, Tail::Left);
        assert!((left + 1.645).abs() < 0.01, "got {}", left);
    }
}
