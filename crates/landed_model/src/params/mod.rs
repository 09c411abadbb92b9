//! Parameter snapshot types.
//!
//! All inputs to the engine travel in a single immutable
//! [`CostSnapshot`]. Analytics that need a perturbed variant clone the
//! snapshot and adjust one field; nothing in the engine ever mutates a
//! snapshot it was given.
//!
//! Percentage-valued fields are [`Rate`]s, normalised from whole-number
//! percentages exactly once at construction. Multiplier-valued fields
//! (quality, modality, climate and friends) are plain scalars expected
//! in documented ranges; out-of-range values degrade model validity but
//! are accepted, because the engine validates arithmetic
//! well-definedness only.
//!
//! `Default` implementations reproduce the reference import scenario
//! (FOB 10 000, 8% freight, 0.5% insurance, 12% tariff, 10% VAT,
//! base freight 800, brokerage 200, distribution 100).

use landed_core::types::Rate;
use num_traits::Float;

use crate::breakdown::CostComponent;

/// Numeric literal conversion for generic defaults.
fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap()
}

/// Transaction-level inputs: price, rates, and shipment geometry.
///
/// # Examples
/// ```
/// use landed_model::params::TransactionParameters;
/// use landed_core::types::Rate;
///
/// let mut tx = TransactionParameters::<f64>::default();
/// tx.fob_price = 50_000.0;
/// tx.tariff_rate = Rate::from_percent(12.0);
/// assert_eq!(tx.tariff_rate.fraction(), 0.12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionParameters<T: Float> {
    /// FOB price of the goods at origin.
    pub fob_price: T,
    /// Freight as a share of the FOB price.
    pub freight_rate: Rate<T>,
    /// Insurance as a share of the CIF value (self-referential in the
    /// landed-value model).
    pub insurance_rate: Rate<T>,
    /// Ad-valorem tariff rate.
    pub tariff_rate: Rate<T>,
    /// VAT rate applied to CIF plus duties.
    pub vat_rate: Rate<T>,
    /// Other specific import taxes on the CIF value.
    pub other_taxes_rate: Rate<T>,
    /// Purchase exchange rate (local currency per unit of invoice
    /// currency).
    pub exchange_rate: T,
    /// Shipment distance in kilometres.
    pub shipment_distance_km: T,
    /// Shipment weight in kilograms.
    pub shipment_weight_kg: T,
    /// Minimum demand in units, the feasibility floor for the order-size
    /// optimiser.
    pub demand_quantity: u64,
}

impl<T: Float> Default for TransactionParameters<T> {
    fn default() -> Self {
        Self {
            fob_price: lit(10_000.0),
            freight_rate: Rate::from_percent(lit(8.0)),
            insurance_rate: Rate::from_percent(lit(0.5)),
            tariff_rate: Rate::from_percent(lit(12.0)),
            vat_rate: Rate::from_percent(lit(10.0)),
            other_taxes_rate: Rate::from_percent(lit(2.0)),
            exchange_rate: lit(8_000.0),
            shipment_distance_km: lit(5_000.0),
            shipment_weight_kg: lit(1_000.0),
            demand_quantity: 1,
        }
    }
}

/// Additional cost line items for the landed-value model, grouped into
/// customs-side and operational-side expenses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdditionalCosts<T: Float> {
    /// Customs brokerage (agency) fee.
    pub customs_brokerage: T,
    /// Port storage charges.
    pub port_storage: T,
    /// Cargo handling charges.
    pub cargo_handling: T,
    /// Customs documentation fees.
    pub customs_documentation: T,
    /// Inland transport from port to warehouse.
    pub inland_transport: T,
    /// Local insurance cover.
    pub local_insurance: T,
    /// Financing charges on the operation.
    pub financing_charges: T,
    /// Any other operational expenses.
    pub other_expenses: T,
}

impl<T: Float> AdditionalCosts<T> {
    /// Total customs-side expenses.
    pub fn customs_total(&self) -> T {
        self.customs_brokerage + self.port_storage + self.cargo_handling + self.customs_documentation
    }

    /// Total operational-side expenses.
    pub fn operational_total(&self) -> T {
        self.inland_transport + self.local_insurance + self.financing_charges + self.other_expenses
    }
}

impl<T: Float> Default for AdditionalCosts<T> {
    fn default() -> Self {
        Self {
            customs_brokerage: lit(200.0),
            port_storage: T::zero(),
            cargo_handling: T::zero(),
            customs_documentation: T::zero(),
            inland_transport: lit(100.0),
            local_insurance: T::zero(),
            financing_charges: T::zero(),
            other_expenses: T::zero(),
        }
    }
}

/// Power-law order-size cost curve parameters plus the financing
/// horizon used for the time-adjusted total.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaleModelParameters<T: Float> {
    /// Fixed cost per order (the α term).
    pub fixed_cost: T,
    /// Variable cost coefficient per unit (the β term).
    pub unit_variable_cost: T,
    /// Scale exponent γ; economies of scale expect 0 < γ < 1
    /// (not enforced).
    pub scale_exponent: T,
    /// Discount rate for the financed total.
    pub discount_rate: Rate<T>,
    /// Operation horizon in years.
    pub operation_horizon_years: T,
}

impl<T: Float> Default for ScaleModelParameters<T> {
    fn default() -> Self {
        Self {
            fixed_cost: lit(2_000.0),
            unit_variable_cost: lit(50.0),
            scale_exponent: lit(0.8),
            discount_rate: Rate::from_percent(lit(8.0)),
            operation_horizon_years: lit(0.25),
        }
    }
}

/// Means, variances, and the covariance term for the stochastically
/// modelled inputs.
///
/// Only the CIF level, the exchange rate, and the customs expenses carry
/// variances; the tax rates enter the propagated mean but are treated as
/// known. The single covariance term couples the CIF level to the
/// exchange rate.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StochasticParameters<T: Float> {
    /// Expected CIF value (invoice currency).
    pub mean_cif: T,
    /// Expected tariff rate.
    pub mean_tariff_rate: Rate<T>,
    /// Expected VAT rate.
    pub mean_vat_rate: Rate<T>,
    /// Expected exchange rate.
    pub mean_exchange_rate: T,
    /// Expected customs expenses (local currency).
    pub mean_customs_expenses: T,
    /// Expected operational expenses (local currency).
    pub mean_operational_expenses: T,
    /// Variance of the CIF value.
    pub var_cif: T,
    /// Variance of the exchange rate.
    pub var_exchange_rate: T,
    /// Variance of the customs expenses.
    pub var_customs_expenses: T,
    /// Covariance between CIF value and exchange rate.
    pub cov_cif_exchange: T,
}

impl<T: Float> Default for StochasticParameters<T> {
    fn default() -> Self {
        Self {
            mean_cif: lit(10_854.0),
            mean_tariff_rate: Rate::from_percent(lit(12.0)),
            mean_vat_rate: Rate::from_percent(lit(10.0)),
            mean_exchange_rate: lit(8_000.0),
            mean_customs_expenses: lit(200.0),
            mean_operational_expenses: lit(100.0),
            var_cif: lit(100_000.0),
            var_exchange_rate: lit(10_000.0),
            var_customs_expenses: lit(1_000.0),
            cov_cif_exchange: lit(1_500.0),
        }
    }
}

/// Per-component adjustment factors for the itemised model.
///
/// Multiplier fields are expected in documented bounded ranges (the
/// quality factor in 0.5–2.0, modality and climate near 1.0). Values
/// outside those ranges are accepted; the bound is a modelling
/// convention, not an enforced precondition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdvancedFactors<T: Float> {
    // Direct goods cost
    /// Special packaging surcharge on the FOB price.
    pub packaging_surcharge: Rate<T>,
    /// Certificate-of-origin surcharge on the FOB price.
    pub certification_factor: Rate<T>,
    /// Goods quality multiplier (documented range 0.5–2.0).
    pub quality_factor: T,

    // International transport cost
    /// Base freight charge.
    pub base_freight: T,
    /// Fuel surcharge on the base freight.
    pub fuel_surcharge: Rate<T>,
    /// Transport modality multiplier (sea/air/land).
    pub modality_factor: T,
    /// Seasonal freight surcharge.
    pub seasonal_factor: Rate<T>,

    // Insurance and guarantees cost
    /// Base insurance rate on the insured value.
    pub base_insurance_rate: Rate<T>,
    /// Flat additional insurance premiums.
    pub additional_insurance: T,
    /// Route risk multiplier.
    pub route_risk_factor: T,
    /// Cargo hazard coefficient.
    pub hazard_coefficient: T,
    /// Climate/season risk multiplier.
    pub climate_factor: T,

    // Customs and tax cost
    /// Fixed customs processing fees.
    pub fixed_customs_fees: T,
    /// Tariff penalty surcharge.
    pub penalty_factor: Rate<T>,

    // Operational and financial cost
    /// Customs intermediation (brokerage) fee.
    pub customs_brokerage_fee: T,
    /// Storage fee per day.
    pub daily_storage_fee: T,
    /// Local distribution fee.
    pub local_distribution_fee: T,
    /// Annualised financing interest rate.
    pub financing_rate: Rate<T>,
    /// Financing term in days.
    pub financing_term_days: T,
    /// Operational efficiency multiplier.
    pub efficiency_factor: T,

    // Contingency and optimisation
    /// Contingency reserve rate on the component sum.
    pub contingency_factor: Rate<T>,
    /// Market volatility multiplier.
    pub volatility_factor: T,
    /// Cost variability coefficient.
    pub variability_coefficient: T,
    /// Global optimisation factor applied to the weighted aggregate.
    pub optimisation_factor: T,
    /// Economies-of-scale factor applied to the weighted aggregate.
    pub scale_economies_factor: T,
}

impl<T: Float> Default for AdvancedFactors<T> {
    fn default() -> Self {
        Self {
            packaging_surcharge: Rate::zero(),
            certification_factor: Rate::zero(),
            quality_factor: T::one(),

            base_freight: lit(800.0),
            fuel_surcharge: Rate::zero(),
            modality_factor: T::one(),
            seasonal_factor: Rate::zero(),

            base_insurance_rate: Rate::from_percent(lit(0.5)),
            additional_insurance: T::zero(),
            route_risk_factor: T::one(),
            hazard_coefficient: T::one(),
            climate_factor: T::one(),

            fixed_customs_fees: T::zero(),
            penalty_factor: Rate::zero(),

            customs_brokerage_fee: lit(200.0),
            daily_storage_fee: T::zero(),
            local_distribution_fee: lit(100.0),
            financing_rate: Rate::from_percent(lit(12.0)),
            financing_term_days: lit(30.0),
            efficiency_factor: T::one(),

            contingency_factor: Rate::from_percent(lit(5.0)),
            volatility_factor: T::one(),
            variability_coefficient: T::one(),
            optimisation_factor: T::one(),
            scale_economies_factor: T::one(),
        }
    }
}

/// One aggregation weight per cost component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComponentWeights<T: Float> {
    /// Weight on the direct goods cost.
    pub direct_goods: T,
    /// Weight on the international transport cost.
    pub transport: T,
    /// Weight on the customs and tax cost.
    pub customs_tax: T,
    /// Weight on the insurance and guarantees cost.
    pub insurance_guarantee: T,
    /// Weight on the operational and financial cost.
    pub operational_financial: T,
    /// Weight on the contingency cost.
    pub contingency: T,
}

impl<T: Float> ComponentWeights<T> {
    /// Weight for a given component.
    pub fn weight(&self, component: CostComponent) -> T {
        match component {
            CostComponent::DirectGoods => self.direct_goods,
            CostComponent::Transport => self.transport,
            CostComponent::CustomsTax => self.customs_tax,
            CostComponent::InsuranceGuarantee => self.insurance_guarantee,
            CostComponent::OperationalFinancial => self.operational_financial,
            CostComponent::Contingency => self.contingency,
        }
    }
}

impl<T: Float> Default for ComponentWeights<T> {
    fn default() -> Self {
        Self {
            direct_goods: T::one(),
            transport: T::one(),
            customs_tax: T::one(),
            insurance_guarantee: T::one(),
            operational_financial: T::one(),
            contingency: T::one(),
        }
    }
}

/// One risk percentage per cost component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskFactors<T: Float> {
    /// Currency risk on the direct goods cost.
    pub currency: Rate<T>,
    /// Operational risk on the transport cost.
    pub operational: Rate<T>,
    /// Regulatory risk on the customs and tax cost.
    pub regulatory: Rate<T>,
    /// Logistics risk on the insurance and guarantees cost.
    pub logistics: Rate<T>,
    /// Financial risk on the operational and financial cost.
    pub financial: Rate<T>,
    /// Residual risk on the contingency cost.
    pub residual: Rate<T>,
}

impl<T: Float> RiskFactors<T> {
    /// Risk rate for a given component.
    pub fn risk(&self, component: CostComponent) -> Rate<T> {
        match component {
            CostComponent::DirectGoods => self.currency,
            CostComponent::Transport => self.operational,
            CostComponent::CustomsTax => self.regulatory,
            CostComponent::InsuranceGuarantee => self.logistics,
            CostComponent::OperationalFinancial => self.financial,
            CostComponent::Contingency => self.residual,
        }
    }

    /// Mean of the six risk fractions.
    pub fn mean_fraction(&self) -> T {
        let six = T::from(6.0).unwrap();
        (self.currency.fraction()
            + self.operational.fraction()
            + self.regulatory.fraction()
            + self.logistics.fraction()
            + self.financial.fraction()
            + self.residual.fraction())
            / six
    }
}

impl<T: Float> Default for RiskFactors<T> {
    fn default() -> Self {
        Self {
            currency: Rate::zero(),
            operational: Rate::zero(),
            regulatory: Rate::zero(),
            logistics: Rate::zero(),
            financial: Rate::zero(),
            residual: Rate::zero(),
        }
    }
}

/// The complete immutable input snapshot for one engine invocation.
///
/// Snapshots are plain values: cheap to clone, trivially shareable
/// across threads, and never mutated by the engine. The analytics layer
/// derives perturbed variants by cloning and adjusting single fields.
///
/// # Examples
/// ```
/// use landed_model::params::CostSnapshot;
///
/// let base = CostSnapshot::<f64>::default();
/// let mut stressed = base.clone();
/// stressed.transaction.fob_price = base.transaction.fob_price * 1.10;
///
/// // The original is untouched.
/// assert_eq!(base.transaction.fob_price, 10_000.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostSnapshot<T: Float> {
    /// Transaction-level inputs.
    pub transaction: TransactionParameters<T>,
    /// Additional cost line items (landed-value model).
    pub additional_costs: AdditionalCosts<T>,
    /// Order-size cost curve and financing horizon.
    pub scale_model: ScaleModelParameters<T>,
    /// Stochastic means/variances/covariance.
    pub stochastic: StochasticParameters<T>,
    /// Per-component adjustment factors (itemised model).
    pub advanced: AdvancedFactors<T>,
    /// Aggregation weights.
    pub weights: ComponentWeights<T>,
    /// Per-component risk percentages.
    pub risks: RiskFactors<T>,
}

impl<T: Float> Default for CostSnapshot<T> {
    fn default() -> Self {
        Self {
            transaction: TransactionParameters::default(),
            additional_costs: AdditionalCosts::default(),
            scale_model: ScaleModelParameters::default(),
            stochastic: StochasticParameters::default(),
            advanced: AdvancedFactors::default(),
            weights: ComponentWeights::default(),
            risks: RiskFactors::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_transaction_matches_reference_scenario() {
        let tx = TransactionParameters::<f64>::default();
        assert_eq!(tx.fob_price, 10_000.0);
        assert_eq!(tx.freight_rate.fraction(), 0.08);
        assert_eq!(tx.insurance_rate.fraction(), 0.005);
        assert_eq!(tx.tariff_rate.fraction(), 0.12);
        assert_eq!(tx.vat_rate.fraction(), 0.10);
        assert_eq!(tx.demand_quantity, 1);
    }

    #[test]
    fn test_additional_costs_group_totals() {
        let costs = AdditionalCosts::<f64>::default();
        assert_eq!(costs.customs_total(), 200.0);
        assert_eq!(costs.operational_total(), 100.0);
    }

    #[test]
    fn test_weights_lookup_covers_all_components() {
        let weights = ComponentWeights::<f64>::default();
        for component in CostComponent::ALL {
            assert_eq!(weights.weight(component), 1.0);
        }
    }

    #[test]
    fn test_risk_mean_fraction() {
        let mut risks = RiskFactors::<f64>::default();
        risks.currency = landed_core::types::Rate::from_percent(6.0);
        assert_eq!(risks.mean_fraction(), 0.01);
    }

    #[test]
    fn test_snapshot_clone_is_independent() {
        let base = CostSnapshot::<f64>::default();
        let mut other = base.clone();
        other.advanced.base_freight = 999.0;
        assert_eq!(base.advanced.base_freight, 800.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_serde_roundtrip() {
        let snapshot = CostSnapshot::<f64>::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: CostSnapshot<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_snapshot_sections_default_when_missing() {
        // An empty document deserialises to the reference scenario.
        let snapshot: CostSnapshot<f64> = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, CostSnapshot::default());
    }
}
