//! Strip-wise mean squared error comparison
//!
//! Each stored strip is compared with the candidate strip at the same
//! position. Pixel differences are taken in signed arithmetic so a darker
//! candidate cannot wrap around to a small error. The per-strip errors are
//! summed without weighting and the sum is compared against an absolute
//! threshold.

use crate::io::configuration::MSE_THRESHOLD;
use crate::io::error::{AuthError, Result, invalid_input};
use crate::spatial::strip::Strip;

/// Decision parameters for a comparison
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    /// Authentication passes when the MSE sum is strictly below this value
    pub threshold: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            threshold: MSE_THRESHOLD,
        }
    }
}

/// Outcome of comparing a candidate against stored strips
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    /// Mean squared error of each strip pair, in strip order
    pub strip_errors: Vec<f64>,
    /// Threshold the total was compared against
    pub threshold: f64,
}

impl MatchReport {
    /// Sum of all per-strip errors
    pub fn total_error(&self) -> f64 {
        self.strip_errors.iter().sum()
    }

    /// True when the total error is strictly below the threshold
    pub fn is_match(&self) -> bool {
        self.total_error() < self.threshold
    }
}

/// Mean of squared channel differences between two strips of equal shape
///
/// # Errors
///
/// Returns an error if:
/// - The strips have different shapes
/// - The strips are empty
pub fn mean_squared_error(index: usize, stored: &Strip, candidate: &Strip) -> Result<f64> {
    if stored.shape() != candidate.shape() {
        return Err(AuthError::DimensionMismatch {
            index,
            stored: stored.shape(),
            candidate: candidate.shape(),
        });
    }
    if stored.is_empty() {
        return Err(invalid_input("strip", &index, &"strip holds no pixels"));
    }

    let squared_sum: u64 = stored
        .view()
        .iter()
        .zip(candidate.view().iter())
        .map(|(&a, &b)| {
            let diff = i32::from(a) - i32::from(b);
            u64::from(diff.unsigned_abs().pow(2))
        })
        .sum();

    Ok(squared_sum as f64 / stored.len() as f64)
}

/// Compare candidate strips against stored strips under `policy`
///
/// # Errors
///
/// Returns an error if there are no stored strips, the strip counts differ
/// or any strip pair differs in shape
pub fn compare(stored: &[Strip], candidate: &[Strip], policy: MatchPolicy) -> Result<MatchReport> {
    if stored.is_empty() {
        return Err(invalid_input(
            "strips",
            &0,
            &"at least one stored strip is required",
        ));
    }
    if stored.len() != candidate.len() {
        return Err(AuthError::StripCountMismatch {
            stored: stored.len(),
            candidate: candidate.len(),
        });
    }

    let strip_errors = stored
        .iter()
        .zip(candidate)
        .enumerate()
        .map(|(index, (s, c))| mean_squared_error(index, s, c))
        .collect::<Result<Vec<_>>>()?;

    Ok(MatchReport {
        strip_errors,
        threshold: policy.threshold,
    })
}

/// True when `candidate` matches `stored` under the default threshold
///
/// # Errors
///
/// Returns an error if there are no stored strips, the strip counts differ
/// or any strip pair differs in shape
pub fn matches(stored: &[Strip], candidate: &[Strip]) -> Result<bool> {
    compare(stored, candidate, MatchPolicy::default()).map(|report| report.is_match())
}
