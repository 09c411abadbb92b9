//! Optimiser error types.

use thiserror::Error;

/// Failures of the order-size search.
///
/// # Variants
/// - `Infeasible`: no candidate quantity meets the minimum-demand
///   constraint. Surfaced explicitly rather than fabricating a default
///   quantity.
/// - `NoCandidates`: the candidate list was empty.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptimiserError {
    /// No candidate meets the minimum-demand constraint.
    #[error("no candidate quantity meets the minimum demand of {min_demand} units")]
    Infeasible {
        /// The demand floor that excluded every candidate.
        min_demand: u64,
    },

    /// The candidate list was empty.
    #[error("candidate quantity list is empty")]
    NoCandidates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infeasible_display() {
        let err = OptimiserError::Infeasible { min_demand: 60 };
        assert_eq!(
            format!("{}", err),
            "no candidate quantity meets the minimum demand of 60 units"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = OptimiserError::NoCandidates;
        let _: &dyn std::error::Error = &err;
    }
}
