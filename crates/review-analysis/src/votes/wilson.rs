//! Lower bound of the Wilson score interval for a binomial proportion.
//!
//! ```text
//! bound = (p + z²/2n − z·√((p(1−p) + z²/4n) / n)) / (1 + z²/n)
//! ```
//!
//! `p` is the helpful ratio, `n` the vote count, `z` the two-tailed
//! standard-normal quantile for the confidence level. Small samples get a
//! conservative bound, so 10/10 ranks below 1000/1000.

use statrs::function::erf::erf_inv;

use review_core::constants::{DEFAULT_CONFIDENCE, DEFAULT_NUMERIC_TOLERANCE};
use review_core::errors::ScoringError;

use super::helpfulness::check_counts;

/// A Wilson lower-bound estimator with its quantile precomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilsonBound {
    confidence: f64,
    z: f64,
    tolerance: f64,
}

impl WilsonBound {
    /// Estimator at `confidence` with the default rounding tolerance.
    pub fn new(confidence: f64) -> Result<Self, ScoringError> {
        Self::with_tolerance(confidence, DEFAULT_NUMERIC_TOLERANCE)
    }

    /// Estimator at the default 95% confidence level.
    pub fn with_defaults() -> Result<Self, ScoringError> {
        Self::new(DEFAULT_CONFIDENCE)
    }

    /// `tolerance` bounds how far a raw result may sit outside [0, 1] and
    /// still be clamped back in. Anything further is a `NumericDomain` error.
    pub fn with_tolerance(confidence: f64, tolerance: f64) -> Result<Self, ScoringError> {
        Ok(Self {
            confidence,
            z: z_score(confidence)?,
            tolerance: tolerance.max(0.0),
        })
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Wilson lower bound for `yes` helpful votes out of `total`.
    ///
    /// Zero votes carry no signal and score `0.0`.
    pub fn lower_bound(&self, yes: u32, total: u32) -> Result<f64, ScoringError> {
        check_counts(yes, total)?;
        if total == 0 {
            return Ok(0.0);
        }
        into_unit_interval(raw_lower_bound(yes, total, self.z), self.tolerance)
    }
}

/// Wilson lower bound at an arbitrary confidence level.
///
/// Recomputes the quantile on every call; prefer [`WilsonBound`] in loops.
pub fn wilson_lower_bound(yes: u32, total: u32, confidence: f64) -> Result<f64, ScoringError> {
    WilsonBound::new(confidence)?.lower_bound(yes, total)
}

/// Two-tailed standard-normal quantile: the `z` with `P(−z < Z < z) = confidence`.
///
/// Uses the identity `Φ⁻¹(1 − α/2) = √2 · erf⁻¹(confidence)`.
pub fn z_score(confidence: f64) -> Result<f64, ScoringError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(ScoringError::InvalidConfidence { confidence });
    }
    Ok(std::f64::consts::SQRT_2 * erf_inv(confidence))
}

fn raw_lower_bound(yes: u32, total: u32, z: f64) -> f64 {
    let n = f64::from(total);
    let phat = f64::from(yes) / n;
    let z2 = z * z;

    let centre = phat + z2 / (2.0 * n);
    let margin = z * ((phat * (1.0 - phat) + z2 / (4.0 * n)) / n).sqrt();
    (centre - margin) / (1.0 + z2 / n)
}

/// Clamp rounding residue back into [0, 1]; reject anything further out.
fn into_unit_interval(raw: f64, tolerance: f64) -> Result<f64, ScoringError> {
    if !raw.is_finite() || raw < -tolerance || raw > 1.0 + tolerance {
        return Err(ScoringError::NumericDomain { value: raw });
    }
    Ok(raw.clamp(0.0, 1.0))
}
