//! Integration tests for the analytics layer.
//!
//! These run the full suite — propagation, elasticity, correlation,
//! batch evaluation — over one snapshot the way the service layer does,
//! and verify the cross-cutting contracts: determinism, matrix shape
//! invariants, and agreement with the sequential compiler.

use approx::assert_relative_eq;
use landed_model::breakdown::CostComponent;
use landed_model::compiler::compute_itemised;
use landed_model::params::CostSnapshot;
use landed_risk::correlation::CorrelationEstimator;
use landed_risk::elasticity::{elasticities, PerturbationVariable};
use landed_risk::parallel::{evaluate_batch, ParallelConfig};
use landed_risk::propagation::propagate;

#[test]
fn full_suite_runs_over_one_snapshot() {
    let snapshot = CostSnapshot::<f64>::default();

    let breakdown = compute_itemised(&snapshot);
    assert!(breakdown.total_acquisition_cost > 0.0);

    let risk = propagate(&snapshot.stochastic).unwrap();
    assert!(risk.expected > 0.0);
    assert!(risk.std_dev >= 0.0);

    let matrix = elasticities(&snapshot, &PerturbationVariable::ALL, &CostComponent::ALL);
    assert_eq!(matrix.values.len(), PerturbationVariable::ALL.len());

    let correlations = CorrelationEstimator::default().component_correlations(&snapshot);
    assert_eq!(correlations.values.len(), CostComponent::ALL.len());
}

#[test]
fn analytics_are_deterministic_end_to_end() {
    let snapshot = CostSnapshot::<f64>::default();
    let estimator = CorrelationEstimator::new(1234, 1_024);

    let first = (
        elasticities(&snapshot, &PerturbationVariable::ALL, &CostComponent::ALL),
        estimator.component_correlations(&snapshot),
        propagate(&snapshot.stochastic).unwrap(),
    );
    let second = (
        elasticities(&snapshot, &PerturbationVariable::ALL, &CostComponent::ALL),
        estimator.component_correlations(&snapshot),
        propagate(&snapshot.stochastic).unwrap(),
    );
    assert_eq!(first, second);
}

#[test]
fn batch_evaluator_agrees_with_elasticity_base_case() {
    // The batch evaluator and the elasticity analyser share the same
    // compiler; scoring the base snapshot both ways must agree.
    let snapshot = CostSnapshot::<f64>::default();
    let breakdowns = evaluate_batch(
        std::slice::from_ref(&snapshot),
        ParallelConfig::default(),
    );
    assert_eq!(breakdowns[0], compute_itemised(&snapshot));
}

#[test]
fn stressed_snapshot_moves_every_analytic() {
    let base = CostSnapshot::<f64>::default();
    let mut stressed = base.clone();
    stressed.transaction.fob_price *= 2.0;
    stressed.stochastic.mean_cif *= 2.0;

    let base_breakdown = compute_itemised(&base);
    let stressed_breakdown = compute_itemised(&stressed);
    assert!(stressed_breakdown.total_acquisition_cost > base_breakdown.total_acquisition_cost);

    let base_risk = propagate(&base.stochastic).unwrap();
    let stressed_risk = propagate(&stressed.stochastic).unwrap();
    assert!(stressed_risk.expected > base_risk.expected);
    // Same absolute variances on a larger mean: tighter relative spread.
    assert!(
        stressed_risk.coefficient_of_variation_pct < base_risk.coefficient_of_variation_pct
    );
}

#[test]
fn elasticity_matrix_matches_direct_perturbation() {
    // Spot-check one cell against a hand-rolled recomputation.
    let snapshot = CostSnapshot::<f64>::default();
    let matrix = elasticities(&snapshot, &[PerturbationVariable::VatRate], &CostComponent::ALL);

    let base = compute_itemised(&snapshot);
    let mut perturbed = snapshot.clone();
    perturbed.transaction.vat_rate = landed_core::types::Rate::from_fraction(
        snapshot.transaction.vat_rate.fraction() * 1.01,
    );
    let shifted = compute_itemised(&perturbed);

    let expected = ((shifted.customs_tax - base.customs_tax) / base.customs_tax) / 0.01;
    let actual = matrix
        .get(PerturbationVariable::VatRate, CostComponent::CustomsTax)
        .unwrap();
    assert_relative_eq!(actual, expected, max_relative = 1e-12);
}
