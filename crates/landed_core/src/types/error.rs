//! Error types for structured error handling.
//!
//! This module provides [`DomainError`], raised when an algebraic
//! precondition of a closed-form equation is violated. Everything else the
//! engine accepts: negative or out-of-documented-range factors produce a
//! result rather than an error, because the engine validates arithmetic
//! well-definedness only, never business plausibility.

use thiserror::Error;

/// Algebraic precondition violations.
///
/// These are raised eagerly, before the offending division or root is
/// evaluated, so callers never observe `Infinity` or `NaN` escaping a
/// computation.
///
/// # Variants
/// - `InsuranceRateSingular`: the self-referential CIF solve divides by
///   `1 - rate`; a rate at or above 100% is a singularity
/// - `NegativeVariance`: a variance below zero has no real standard
///   deviation
///
/// # Examples
/// ```
/// use landed_core::types::DomainError;
///
/// let err = DomainError::InsuranceRateSingular { rate: 1.0 };
/// assert!(format!("{}", err).contains("insurance rate"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DomainError {
    /// Insurance rate at or above 100% in the self-referential CIF solve.
    #[error("insurance rate {rate} is singular: the CIF solve requires rate < 1")]
    InsuranceRateSingular {
        /// The offending fractional rate.
        rate: f64,
    },

    /// Variance input below zero.
    #[error("variance {variance} is negative: standard deviation undefined")]
    NegativeVariance {
        /// The offending variance.
        variance: f64,
    },
}
