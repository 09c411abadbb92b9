//! Itemised six-component cost model.
//!
//! ## Mathematical formulas
//!
//! **Direct goods**: CD = FOB · (1 + τe) · (1 + δ) · γq
//!
//! **Transport**: CTI = FB · (1 + βc) · λd · ψm · (1 + μs), with the
//! distance attenuation λd = 1 + (D / Dref)^0.3
//!
//! **Customs and tax**: duties = VCIF · τa · (1 + ηp);
//! CAT = duties + (VCIF + duties) · τv + ΣTf, over the intermediate
//! VCIF = FOB + CTI + base insurance
//!
//! **Insurance and guarantees**: CSG = VCIF · σ · (1 + α·κ) · Θ + Σsg
//!
//! **Operational and financial**:
//! COF = (Cia + Ca·tp + Cd) · (1 + i·tp/365) · νe
//!
//! **Contingency**: CF = (CD + CTI + CAT + CSG + COF) · φ · ρ · ωv
//!
//! The weighted aggregate uplifts each component by its risk rate,
//! scales by its weight, sums, and applies the optimisation and
//! scale-economies factors.

use landed_core::math::safe_ratio;
use num_traits::Float;

use super::{DAYS_PER_YEAR, DISTANCE_ATTENUATION_EXPONENT, REFERENCE_DISTANCE_KM};
use crate::breakdown::{CostComponent, ItemisedBreakdown};
use crate::params::CostSnapshot;

/// Evaluate the itemised six-component model over a snapshot.
///
/// Pure and total: any numerically finite snapshot produces a complete
/// breakdown. Negative factors or weights flow through unclamped.
///
/// # Examples
/// ```
/// use landed_model::compiler::compute_itemised;
/// use landed_model::params::CostSnapshot;
///
/// let breakdown = compute_itemised(&CostSnapshot::<f64>::default());
///
/// // With unit weights, no risks and unit optimisation factors the
/// // aggregate is the plain component sum.
/// let sum: f64 = breakdown.components().iter().sum();
/// assert!((breakdown.total_acquisition_cost - sum).abs() < 1e-9 * sum);
/// ```
pub fn compute_itemised<T: Float>(snapshot: &CostSnapshot<T>) -> ItemisedBreakdown<T> {
    let tx = &snapshot.transaction;
    let f = &snapshot.advanced;
    let one = T::one();

    // CD = FOB × (1 + τe) × (1 + δ) × γq
    let direct_goods = tx.fob_price
        * f.packaging_surcharge.uplift()
        * f.certification_factor.uplift()
        * f.quality_factor;

    // λd = 1 + (D / Dref)^0.3
    let reference_distance = T::from(REFERENCE_DISTANCE_KM).unwrap();
    let attenuation_exponent = T::from(DISTANCE_ATTENUATION_EXPONENT).unwrap();
    let distance_attenuation =
        one + (tx.shipment_distance_km / reference_distance).powf(attenuation_exponent);

    // CTI = FB × (1 + βc) × λd × ψm × (1 + μs)
    let transport = f.base_freight
        * f.fuel_surcharge.uplift()
        * distance_attenuation
        * f.modality_factor
        * f.seasonal_factor.uplift();

    // Base insurance feeding the CIF value.
    let base_insurance = (tx.fob_price + transport)
        * f.base_insurance_rate.fraction()
        * f.route_risk_factor
        * f.hazard_coefficient
        * f.climate_factor;

    // VCIF = FOB + CTI + base insurance
    let cif_value = tx.fob_price + transport + base_insurance;

    // CAT = duties + (VCIF + duties) × τv + ΣTf
    let duties = cif_value * tx.tariff_rate.fraction() * f.penalty_factor.uplift();
    let vat = (cif_value + duties) * tx.vat_rate.fraction();
    let customs_tax = duties + vat + f.fixed_customs_fees;

    // CSG = VCIF × σ × (1 + α × κ) × Θ + Σsg
    let insurance_guarantee = cif_value
        * f.base_insurance_rate.fraction()
        * (one + f.route_risk_factor * f.hazard_coefficient)
        * f.climate_factor
        + f.additional_insurance;

    // COF = (Cia + Ca × tp + Cd) × (1 + i × tp / 365) × νe
    let operational_base = f.customs_brokerage_fee
        + f.daily_storage_fee * f.financing_term_days
        + f.local_distribution_fee;
    let days_per_year = T::from(DAYS_PER_YEAR).unwrap();
    let operational_financial = operational_base
        * (one + f.financing_rate.fraction() * (f.financing_term_days / days_per_year))
        * f.efficiency_factor;

    // CF = (CD + CTI + CAT + CSG + COF) × φ × ρ × ωv
    let component_sum =
        direct_goods + transport + customs_tax + insurance_guarantee + operational_financial;
    let contingency = component_sum
        * f.contingency_factor.fraction()
        * f.volatility_factor
        * f.variability_coefficient;

    let breakdown_base = [
        direct_goods,
        transport,
        customs_tax,
        insurance_guarantee,
        operational_financial,
        contingency,
    ];

    // Ci' = Ci × (1 + Ri) × Wi
    let mut weighted_total_unoptimised = T::zero();
    for (value, component) in breakdown_base.into_iter().zip(CostComponent::ALL) {
        let weighted = value
            * snapshot.risks.risk(component).uplift()
            * snapshot.weights.weight(component);
        weighted_total_unoptimised = weighted_total_unoptimised + weighted;
    }

    // CAI = Σ Ci' × Fo × Fe
    let total_acquisition_cost =
        weighted_total_unoptimised * f.optimisation_factor * f.scale_economies_factor;

    let hundred = T::from(100.0).unwrap();
    let optimisation_savings_pct = safe_ratio(
        weighted_total_unoptimised - total_acquisition_cost,
        weighted_total_unoptimised,
    ) * hundred;

    let mean_risk = snapshot.risks.mean_fraction();
    let risk_adjusted_total = total_acquisition_cost * (one + mean_risk);

    ItemisedBreakdown {
        direct_goods,
        transport,
        customs_tax,
        insurance_guarantee,
        operational_financial,
        contingency,
        cif_value,
        weighted_total_unoptimised,
        total_acquisition_cost,
        optimisation_savings_pct,
        mean_risk,
        risk_adjusted_total,
    }
}
