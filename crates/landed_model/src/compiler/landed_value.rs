//! Landed-value cost model.
//!
//! ## Mathematical formulas
//!
//! The insurance premium is defined on the CIF value while the CIF value
//! includes the premium, so the CIF value is solved in closed form:
//!
//! ```text
//! freight   = FOB × τf
//! CIF       = FOB + freight + insurance,  insurance = CIF × ρ
//!           ⇒ CIF = (FOB + freight) / (1 − ρ)
//! ```
//!
//! The solve is singular at ρ = 1 (100%), which is rejected eagerly as a
//! [`DomainError`] rather than being allowed to produce `Infinity`.
//!
//! Levies stack on the CIF value: duties = CIF·τa,
//! VAT = (CIF + duties)·τv, other taxes = CIF·τo. The total import cost
//! adds the levies and both additional-expense groups; the financed
//! total carries it over the operation horizon at the discount rate
//! with discrete annual compounding.

use landed_core::types::DomainError;
use num_traits::Float;

use crate::breakdown::LandedValueBreakdown;
use crate::params::CostSnapshot;

/// Evaluate the landed-value model over a snapshot.
///
/// # Errors
/// `DomainError::InsuranceRateSingular` when the insurance rate is at or
/// above 100%: the self-referential CIF solve divides by `1 − ρ`.
///
/// # Examples
/// ```
/// use landed_model::compiler::compute_landed_value;
/// use landed_model::params::CostSnapshot;
/// use landed_core::types::Rate;
///
/// let mut snapshot = CostSnapshot::<f64>::default();
/// snapshot.transaction.fob_price = 50_000.0;
///
/// let breakdown = compute_landed_value(&snapshot).unwrap();
/// // CIF − CIF×ρ == FOB + freight, the defining identity of the solve.
/// let residual = breakdown.cif_value * (1.0 - 0.005) - (50_000.0 + 4_000.0);
/// assert!(residual.abs() < 1e-9);
///
/// snapshot.transaction.insurance_rate = Rate::from_percent(100.0);
/// assert!(compute_landed_value(&snapshot).is_err());
/// ```
pub fn compute_landed_value<T: Float>(
    snapshot: &CostSnapshot<T>,
) -> Result<LandedValueBreakdown<T>, DomainError> {
    let tx = &snapshot.transaction;
    let one = T::one();

    let insurance_fraction = tx.insurance_rate.fraction();
    if insurance_fraction >= one {
        return Err(DomainError::InsuranceRateSingular {
            rate: insurance_fraction.to_f64().unwrap_or(f64::NAN),
        });
    }

    let fob = tx.fob_price;
    let freight = fob * tx.freight_rate.fraction();

    // CIF = (FOB + freight) / (1 − ρ)
    let cif_value = (fob + freight) / (one - insurance_fraction);
    let insurance = cif_value * insurance_fraction;

    let dutiable_base = cif_value;
    let duties = dutiable_base * tx.tariff_rate.fraction();
    let vat = (dutiable_base + duties) * tx.vat_rate.fraction();
    let other_taxes = dutiable_base * tx.other_taxes_rate.fraction();
    let total_levies = duties + vat + other_taxes;

    let customs_expenses = snapshot.additional_costs.customs_total();
    let operational_expenses = snapshot.additional_costs.operational_total();

    let total_import_cost = cif_value + total_levies + customs_expenses + operational_expenses;

    // Carried over the horizon at (1 + r)^t.
    let carry = snapshot
        .scale_model
        .discount_rate
        .uplift()
        .powf(snapshot.scale_model.operation_horizon_years);
    let financed_total = total_import_cost * carry;

    Ok(LandedValueBreakdown {
        fob,
        freight,
        insurance,
        cif_value,
        dutiable_base,
        duties,
        vat,
        other_taxes,
        total_levies,
        customs_expenses,
        operational_expenses,
        total_import_cost,
        financed_total,
    })
}
