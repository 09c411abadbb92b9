//! Economies-of-scale order-size search.
//!
//! ## Cost model
//!
//! ```text
//! unitCost(Q)  = α + β · Q^γ
//! totalCost(Q) = unitCost(Q) · Q
//! ```
//!
//! γ in (0, 1) is the economies-of-scale regime; values outside that
//! range are accepted but not meaningful for the model.
//!
//! ## Search
//!
//! A linear scan over the caller-ordered candidate list, skipping
//! candidates below the demand floor and keeping the strict minimum of
//! the total cost. Ties therefore resolve to the first feasible
//! candidate encountered in scan order. Candidate lists are expected to
//! be small and caller-bounded; the scan is O(n) with no iteration
//! beyond it.

use landed_model::params::{CostSnapshot, ScaleModelParameters};
use num_traits::Float;

use crate::error::OptimiserError;

/// Power-law order-size cost curve.
///
/// # Examples
/// ```
/// use landed_optimiser::scale::ScaleCurve;
///
/// let curve = ScaleCurve::new(2_000.0_f64, 50.0, 0.8);
/// assert!(curve.unit_cost(100) > 2_000.0);
/// assert_eq!(curve.total_cost(100), curve.unit_cost(100) * 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleCurve<T: Float> {
    /// Fixed cost per order (α).
    pub fixed_cost: T,
    /// Variable cost coefficient (β).
    pub variable_cost: T,
    /// Scale exponent (γ).
    pub exponent: T,
}

impl<T: Float> ScaleCurve<T> {
    /// Create a curve from its three coefficients.
    pub fn new(fixed_cost: T, variable_cost: T, exponent: T) -> Self {
        Self {
            fixed_cost,
            variable_cost,
            exponent,
        }
    }

    /// Curve from the snapshot's scale-model section.
    pub fn from_parameters(params: &ScaleModelParameters<T>) -> Self {
        Self {
            fixed_cost: params.fixed_cost,
            variable_cost: params.unit_variable_cost,
            exponent: params.scale_exponent,
        }
    }

    /// Cost per unit at quantity `q`: `α + β · q^γ`.
    pub fn unit_cost(&self, q: u64) -> T {
        let quantity = T::from(q).unwrap();
        self.fixed_cost + self.variable_cost * quantity.powf(self.exponent)
    }

    /// Total cost at quantity `q`: `unitCost(q) · q`.
    pub fn total_cost(&self, q: u64) -> T {
        self.unit_cost(q) * T::from(q).unwrap()
    }
}

/// The winning candidate of an order-size search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimalOrder<T: Float> {
    /// The optimal order quantity.
    pub quantity: u64,
    /// Cost per unit at the optimal quantity.
    pub unit_cost: T,
    /// Total cost at the optimal quantity.
    pub total_cost: T,
}

/// Scan the candidates and return the feasible quantity with the lowest
/// total cost.
///
/// Candidates below `min_demand` are excluded. Comparison is strict, so
/// equal-cost candidates resolve to the first one in scan order.
///
/// # Errors
/// - `OptimiserError::NoCandidates` for an empty candidate list
/// - `OptimiserError::Infeasible` when every candidate is below the
///   demand floor
///
/// # Examples
/// ```
/// use landed_optimiser::scale::{optimise, ScaleCurve};
///
/// let curve = ScaleCurve::new(2_000.0_f64, 50.0, 0.8);
///
/// // 10 and 50 fall below the floor; 100 beats 500 on total cost.
/// let best = optimise(&curve, &[10, 50, 100, 500], 60).unwrap();
/// assert_eq!(best.quantity, 100);
///
/// assert!(optimise(&curve, &[10, 50], 60).is_err());
/// ```
pub fn optimise<T: Float>(
    curve: &ScaleCurve<T>,
    candidates: &[u64],
    min_demand: u64,
) -> Result<OptimalOrder<T>, OptimiserError> {
    if candidates.is_empty() {
        return Err(OptimiserError::NoCandidates);
    }

    let mut best: Option<OptimalOrder<T>> = None;
    for &quantity in candidates {
        if quantity < min_demand {
            continue;
        }
        let total_cost = curve.total_cost(quantity);
        let is_better = match &best {
            None => true,
            Some(current) => total_cost < current.total_cost,
        };
        if is_better {
            best = Some(OptimalOrder {
                quantity,
                unit_cost: curve.unit_cost(quantity),
                total_cost,
            });
        }
    }

    best.ok_or(OptimiserError::Infeasible { min_demand })
}

/// Run the search with the curve and demand floor taken from a
/// snapshot.
pub fn optimise_snapshot<T: Float>(
    snapshot: &CostSnapshot<T>,
    candidates: &[u64],
) -> Result<OptimalOrder<T>, OptimiserError> {
    let curve = ScaleCurve::from_parameters(&snapshot.scale_model);
    optimise(&curve, candidates, snapshot.transaction.demand_quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn reference_curve() -> ScaleCurve<f64> {
        ScaleCurve::new(2_000.0, 50.0, 0.8)
    }

    #[test]
    fn test_unit_cost_formula() {
        let curve = reference_curve();
        let expected = 2_000.0 + 50.0 * 100.0f64.powf(0.8);
        assert_relative_eq!(curve.unit_cost(100), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_reference_search_excludes_below_demand() {
        let best = optimise(&reference_curve(), &[10, 50, 100, 500], 60).unwrap();
        assert_eq!(best.quantity, 100);
        assert_relative_eq!(
            best.total_cost,
            (2_000.0 + 50.0 * 100.0f64.powf(0.8)) * 100.0,
            max_relative = 1e-12
        );
        // 500 is feasible but strictly worse.
        assert!(reference_curve().total_cost(500) > best.total_cost);
    }

    #[test]
    fn test_infeasible_when_all_below_floor() {
        let err = optimise(&reference_curve(), &[10, 50], 60).unwrap_err();
        assert_eq!(err, OptimiserError::Infeasible { min_demand: 60 });
    }

    #[test]
    fn test_empty_candidate_list() {
        let err = optimise(&reference_curve(), &[], 60).unwrap_err();
        assert_eq!(err, OptimiserError::NoCandidates);
    }

    #[test]
    fn test_tie_resolves_to_first_in_scan_order() {
        // A flat curve makes every quantity cost the same per unit
        // only at γ = 0 with β folded into α; use α-only instead.
        let curve = ScaleCurve::new(0.0, 0.0, 0.5);
        let best = optimise(&curve, &[200, 100], 50).unwrap();
        // Both total costs are zero; the first candidate wins.
        assert_eq!(best.quantity, 200);
    }

    #[test]
    fn test_boundary_quantity_is_feasible() {
        let best = optimise(&reference_curve(), &[60], 60).unwrap();
        assert_eq!(best.quantity, 60);
    }

    #[test]
    fn test_snapshot_search_uses_demand_floor() {
        let mut snapshot = CostSnapshot::<f64>::default();
        snapshot.transaction.demand_quantity = 60;
        let best = optimise_snapshot(&snapshot, &[10, 50, 100, 500]).unwrap();
        assert_eq!(best.quantity, 100);
    }

    proptest! {
        // The scan result is never beaten by any feasible candidate.
        #[test]
        fn test_scan_returns_feasible_minimum(
            candidates in proptest::collection::vec(1u64..10_000, 1..20),
            min_demand in 1u64..5_000,
        ) {
            let curve = reference_curve();
            match optimise(&curve, &candidates, min_demand) {
                Ok(best) => {
                    prop_assert!(best.quantity >= min_demand);
                    for &q in &candidates {
                        if q >= min_demand {
                            prop_assert!(curve.total_cost(q) >= best.total_cost);
                        }
                    }
                }
                Err(OptimiserError::Infeasible { .. }) => {
                    prop_assert!(candidates.iter().all(|&q| q < min_demand));
                }
                Err(OptimiserError::NoCandidates) => unreachable!(),
            }
        }
    }
}
