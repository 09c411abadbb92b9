//! End-to-end reference scenarios for the cost compiler.
//!
//! These tests pin both model modes to hand-computed closed-form values
//! so any drift in the equations is caught at the boundary a caller
//! observes.

use approx::assert_relative_eq;
use landed_core::types::Rate;
use landed_model::compiler::{compute_itemised, compute_landed_value};
use landed_model::params::CostSnapshot;

/// The worked import example: FOB 50 000, 8% freight, 0.5% insurance,
/// 12% tariff, 19% VAT, 2% other taxes.
fn worked_example() -> CostSnapshot<f64> {
    let mut snapshot = CostSnapshot::default();
    snapshot.transaction.fob_price = 50_000.0;
    snapshot.transaction.freight_rate = Rate::from_percent(8.0);
    snapshot.transaction.insurance_rate = Rate::from_percent(0.5);
    snapshot.transaction.tariff_rate = Rate::from_percent(12.0);
    snapshot.transaction.vat_rate = Rate::from_percent(19.0);
    snapshot.transaction.other_taxes_rate = Rate::from_percent(2.0);
    snapshot.transaction.exchange_rate = 8_000.0;
    snapshot
}

#[test]
fn landed_value_worked_example_matches_closed_form() {
    let breakdown = compute_landed_value(&worked_example()).unwrap();

    // CIF = (50 000 + 4 000) / (1 − 0.005)
    assert_relative_eq!(breakdown.freight, 4_000.0, max_relative = 1e-12);
    assert_relative_eq!(breakdown.cif_value, 54_271.356783919598, max_relative = 1e-6);
    assert_relative_eq!(breakdown.dutiable_base, breakdown.cif_value, max_relative = 1e-12);
    assert_relative_eq!(breakdown.duties, 6_512.5628140703515, max_relative = 1e-6);
    assert_relative_eq!(breakdown.vat, 11_548.944723618091, max_relative = 1e-6);
    assert_relative_eq!(breakdown.other_taxes, 1_085.4271356783919, max_relative = 1e-6);
    assert_relative_eq!(
        breakdown.total_import_cost,
        73_718.291457286435,
        max_relative = 1e-6
    );
}

#[test]
fn landed_value_default_scenario_matches_reference_table() {
    // The defaults reproduce the reference table, including the CIF
    // level the stochastic parameters are centred on.
    let breakdown = compute_landed_value(&CostSnapshot::<f64>::default()).unwrap();
    assert_relative_eq!(breakdown.cif_value, 10_854.271356783919, max_relative = 1e-9);
}

#[test]
fn itemised_default_scenario_is_stable() {
    let snapshot = CostSnapshot::<f64>::default();
    let breakdown = compute_itemised(&snapshot);

    // Transport at the reference distance doubles the base freight.
    assert_relative_eq!(breakdown.transport, 1_600.0, max_relative = 1e-12);

    // CIF = FOB + transport + base insurance at 0.5%.
    let expected_cif = 10_000.0 + 1_600.0 + (10_000.0 + 1_600.0) * 0.005;
    assert_relative_eq!(breakdown.cif_value, expected_cif, max_relative = 1e-12);

    // With unit weights and factors the aggregate is the component sum.
    let sum: f64 = breakdown.components().iter().sum();
    assert_relative_eq!(breakdown.total_acquisition_cost, sum, max_relative = 1e-9);
}

#[test]
fn compiler_calls_are_bit_identical() {
    let snapshot = worked_example();

    let first = compute_landed_value(&snapshot).unwrap();
    let second = compute_landed_value(&snapshot).unwrap();
    assert_eq!(first, second);

    let first = compute_itemised(&snapshot);
    let second = compute_itemised(&snapshot);
    assert_eq!(first, second);
}

#[test]
fn snapshot_parses_from_partial_toml() {
    // Scenario files may supply only the sections they change.
    let toml_source = r#"
        [transaction]
        fob_price = 50000.0
        freight_rate = 0.08
        insurance_rate = 0.005
        tariff_rate = 0.12
        vat_rate = 0.19
        other_taxes_rate = 0.02
        exchange_rate = 8000.0
        shipment_distance_km = 5000.0
        shipment_weight_kg = 1000.0
        demand_quantity = 60
    "#;

    let snapshot: CostSnapshot<f64> = toml::from_str(toml_source).unwrap();
    assert_eq!(snapshot.transaction.fob_price, 50_000.0);
    assert_eq!(snapshot.transaction.demand_quantity, 60);
    // Untouched sections fall back to the reference defaults.
    assert_eq!(snapshot.advanced.base_freight, 800.0);

    let breakdown = compute_landed_value(&snapshot).unwrap();
    assert_relative_eq!(breakdown.cif_value, 54_271.356783919598, max_relative = 1e-6);
}
