//! Family facade: one uniform pdf/cdf/ppf surface over the supported
//! distributions.
//!
//! External callers go through [`Family`] only; the per-family modules are
//! crate-private so a new family is a change local to this file.

use ht_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::{chi_squared, normal, student_t};

/// A hypothesis-test distribution family with its parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family")]
pub enum Family {
    /// Chi-square with `df` degrees of freedom.
    #[serde(rename = "chi")]
    ChiSquared { df: f64 },
    /// Student's-t with `df` degrees of freedom.
    #[serde(rename = "t")]
    StudentT { df: f64 },
    /// Standard normal. Shift/scale is the caller's job.
    #[serde(rename = "normal")]
    Normal,
}

impl Family {
    /// Parse a wire tag (`"chi"`, `"t"`, `"normal"`) plus degrees of
    /// freedom, validating the parameter where the family carries one.
    ///
    /// `df` is ignored for `"normal"`.
    pub fn from_tag(tag: &str, df: f64) -> Result<Self> {
        match tag {
            "chi" => {
                validate_df(df)?;
                Ok(Family::ChiSquared { df })
            }
            "t" => {
                validate_df(df)?;
                Ok(Family::StudentT { df })
            }
            "normal" => Ok(Family::Normal),
            other => Err(Error::Validation(format!(
                "unknown family tag {:?} (expected \"chi\", \"t\", or \"normal\")",
                other
            ))),
        }
    }

    /// Wire tag for this family.
    pub fn tag(&self) -> &'static str {
        match self {
            Family::ChiSquared { .. } => "chi",
            Family::StudentT { .. } => "t",
            Family::Normal => "normal",
        }
    }

    /// Degrees of freedom, where the family carries the parameter.
    pub fn df(&self) -> Option<f64> {
        match *self {
            Family::ChiSquared { df } | Family::StudentT { df } => Some(df),
            Family::Normal => None,
        }
    }

    /// Density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        match *self {
            Family::ChiSquared { df } => chi_squared::pdf(x, df),
            Family::StudentT { df } => student_t::pdf(x, df),
            Family::Normal => normal::pdf(x),
        }
    }

    /// Cumulative probability `P(X <= x)`, in [0, 1].
    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            Family::ChiSquared { df } => chi_squared::cdf(x, df),
            Family::StudentT { df } => student_t::cdf(x, df),
            Family::Normal => normal::cdf(x),
        }
    }

    /// Quantile (percent point): the `x` with `cdf(x) ≈ p`.
    ///
    /// Out-of-range `p` maps to the family's sentinel bounds, never an
    /// error; see the per-family contracts.
    pub fn ppf(&self, p: f64) -> f64 {
        match *self {
            Family::ChiSquared { df } => chi_squared::ppf(p, df),
            Family::StudentT { df } => student_t::ppf(p, df),
            Family::Normal => normal::ppf(p),
        }
    }
}

fn validate_df(df: f64) -> Result<()> {
    if !df.is_finite() || df <= 0.0 {
        return Err(Error::Validation(format!("df must be finite and > 0, got {}", df)));
    }
    Ok(())
}
