//! Cost breakdown output types.
//!
//! Breakdowns are created fresh on every compiler invocation and are
//! never partially computed: a call either returns a complete breakdown
//! or fails before producing one. Callers treat them as read-only
//! display data.

use landed_core::math::safe_ratio;
use num_traits::Float;

/// The six cost components of the itemised model.
///
/// The discriminant order is the canonical reporting order and is relied
/// on by the analytics layer when it builds matrices indexed by
/// component.
///
/// # Examples
/// ```
/// use landed_model::breakdown::CostComponent;
///
/// assert_eq!(CostComponent::ALL.len(), 6);
/// assert_eq!(CostComponent::DirectGoods.code(), "CD");
/// assert_eq!(CostComponent::Contingency.label(), "Contingency cost");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostComponent {
    /// Direct goods cost (CD).
    DirectGoods,
    /// International transport cost (CTI).
    Transport,
    /// Customs and tax cost (CAT).
    CustomsTax,
    /// Insurance and guarantees cost (CSG).
    InsuranceGuarantee,
    /// Operational and financial cost (COF).
    OperationalFinancial,
    /// Contingency cost (CF).
    Contingency,
}

impl CostComponent {
    /// All six components in canonical reporting order.
    pub const ALL: [CostComponent; 6] = [
        CostComponent::DirectGoods,
        CostComponent::Transport,
        CostComponent::CustomsTax,
        CostComponent::InsuranceGuarantee,
        CostComponent::OperationalFinancial,
        CostComponent::Contingency,
    ];

    /// Conventional short code.
    pub fn code(&self) -> &'static str {
        match self {
            CostComponent::DirectGoods => "CD",
            CostComponent::Transport => "CTI",
            CostComponent::CustomsTax => "CAT",
            CostComponent::InsuranceGuarantee => "CSG",
            CostComponent::OperationalFinancial => "COF",
            CostComponent::Contingency => "CF",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            CostComponent::DirectGoods => "Direct goods cost",
            CostComponent::Transport => "International transport cost",
            CostComponent::CustomsTax => "Customs and tax cost",
            CostComponent::InsuranceGuarantee => "Insurance and guarantees cost",
            CostComponent::OperationalFinancial => "Operational and financial cost",
            CostComponent::Contingency => "Contingency cost",
        }
    }
}

/// Output of the itemised six-component model.
///
/// Component values are reported unclamped: negative weights or factors
/// produce negative entries rather than zeros, because the engine trusts
/// its caller for domain validity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemisedBreakdown<T: Float> {
    /// Direct goods cost (CD).
    pub direct_goods: T,
    /// International transport cost (CTI).
    pub transport: T,
    /// Customs and tax cost (CAT).
    pub customs_tax: T,
    /// Insurance and guarantees cost (CSG).
    pub insurance_guarantee: T,
    /// Operational and financial cost (COF).
    pub operational_financial: T,
    /// Contingency cost (CF).
    pub contingency: T,
    /// Intermediate CIF value (FOB + transport + base insurance).
    pub cif_value: T,
    /// Weighted, risk-uplifted aggregate before optimisation factors.
    pub weighted_total_unoptimised: T,
    /// Total acquisition cost: the weighted aggregate after the
    /// optimisation and scale-economies factors.
    pub total_acquisition_cost: T,
    /// Savings from the optimisation factors, as a percentage of the
    /// unoptimised aggregate (zero when that aggregate is zero).
    pub optimisation_savings_pct: T,
    /// Mean of the six component risk fractions.
    pub mean_risk: T,
    /// Total acquisition cost uplifted by the mean risk.
    pub risk_adjusted_total: T,
}

impl<T: Float> ItemisedBreakdown<T> {
    /// Value of a single component.
    pub fn component(&self, component: CostComponent) -> T {
        match component {
            CostComponent::DirectGoods => self.direct_goods,
            CostComponent::Transport => self.transport,
            CostComponent::CustomsTax => self.customs_tax,
            CostComponent::InsuranceGuarantee => self.insurance_guarantee,
            CostComponent::OperationalFinancial => self.operational_financial,
            CostComponent::Contingency => self.contingency,
        }
    }

    /// All six component values in canonical order.
    pub fn components(&self) -> [T; 6] {
        [
            self.direct_goods,
            self.transport,
            self.customs_tax,
            self.insurance_guarantee,
            self.operational_financial,
            self.contingency,
        ]
    }

    /// Share of a component in the total acquisition cost, in percent.
    /// Zero when the total is zero.
    pub fn component_share_pct(&self, component: CostComponent) -> T {
        safe_ratio(self.component(component), self.total_acquisition_cost)
            * T::from(100.0).unwrap()
    }
}

/// Output of the landed-value model.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LandedValueBreakdown<T: Float> {
    /// FOB price.
    pub fob: T,
    /// Freight charge (FOB × freight rate).
    pub freight: T,
    /// Insurance premium (CIF × insurance rate).
    pub insurance: T,
    /// CIF value from the closed-form self-referential solve.
    pub cif_value: T,
    /// Dutiable base (equals the CIF value).
    pub dutiable_base: T,
    /// Ad-valorem duties.
    pub duties: T,
    /// VAT on CIF plus duties.
    pub vat: T,
    /// Other specific import taxes.
    pub other_taxes: T,
    /// Duties + VAT + other taxes.
    pub total_levies: T,
    /// Customs-side additional expenses.
    pub customs_expenses: T,
    /// Operational-side additional expenses.
    pub operational_expenses: T,
    /// CIF + levies + customs + operational expenses.
    pub total_import_cost: T,
    /// Total import cost carried over the financing horizon at the
    /// discount rate.
    pub financed_total: T,
}

/// Breakdown from either model mode, for callers that select the mode
/// at runtime.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Breakdown<T: Float> {
    /// Result of the itemised six-component model.
    Itemised(ItemisedBreakdown<T>),
    /// Result of the landed-value model.
    LandedValue(LandedValueBreakdown<T>),
}

impl<T: Float> Breakdown<T> {
    /// The headline total of either mode.
    pub fn total(&self) -> T {
        match self {
            Breakdown::Itemised(b) => b.total_acquisition_cost,
            Breakdown::LandedValue(b) => b.total_import_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_codes_are_distinct() {
        let codes: Vec<&str> = CostComponent::ALL.iter().map(|c| c.code()).collect();
        let mut deduped = codes.clone();
        deduped.dedup();
        assert_eq!(codes.len(), 6);
        assert_eq!(codes, deduped);
    }

    #[test]
    fn test_components_accessor_matches_fields() {
        let breakdown = ItemisedBreakdown {
            direct_goods: 1.0_f64,
            transport: 2.0,
            customs_tax: 3.0,
            insurance_guarantee: 4.0,
            operational_financial: 5.0,
            contingency: 6.0,
            cif_value: 0.0,
            weighted_total_unoptimised: 21.0,
            total_acquisition_cost: 21.0,
            optimisation_savings_pct: 0.0,
            mean_risk: 0.0,
            risk_adjusted_total: 21.0,
        };
        assert_eq!(breakdown.components(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        for (i, component) in CostComponent::ALL.into_iter().enumerate() {
            assert_eq!(breakdown.component(component), breakdown.components()[i]);
        }
    }

    #[test]
    fn test_component_share_zero_total() {
        let breakdown = ItemisedBreakdown {
            direct_goods: 1.0_f64,
            transport: 0.0,
            customs_tax: 0.0,
            insurance_guarantee: 0.0,
            operational_financial: 0.0,
            contingency: 0.0,
            cif_value: 0.0,
            weighted_total_unoptimised: 0.0,
            total_acquisition_cost: 0.0,
            optimisation_savings_pct: 0.0,
            mean_risk: 0.0,
            risk_adjusted_total: 0.0,
        };
        assert_eq!(
            breakdown.component_share_pct(CostComponent::DirectGoods),
            0.0
        );
    }
}
