//! Finite-difference elasticity analysis.
//!
//! For each perturbation variable, one input of the snapshot is scaled
//! by `1 + PERTURBATION_STEP` while everything else is held fixed, the
//! itemised compiler is re-run, and the point elasticity of every cost
//! component is taken:
//!
//! ```text
//! ε(var, component) = ((Y' − Y) / Y) / step
//! ```
//!
//! A zero base value makes the ratio undefined; the contract resolves
//! it to 0 so consumers never observe `NaN`. The step is shared by all
//! rows, which keeps the matrix reproducible between calls.

use landed_core::math::safe_ratio;
use landed_core::types::Rate;
use landed_model::breakdown::CostComponent;
use num_traits::Float;
use landed_model::compiler::compute_itemised;
use landed_model::params::CostSnapshot;

/// Relative perturbation step applied to each variable (+1%).
pub const PERTURBATION_STEP: f64 = 0.01;

/// Inputs the analyser can perturb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PerturbationVariable {
    /// FOB price of the goods.
    FobPrice,
    /// Ad-valorem tariff rate.
    TariffRate,
    /// VAT rate.
    VatRate,
    /// Base freight charge.
    BaseFreight,
    /// Global optimisation factor.
    OptimisationFactor,
}

impl PerturbationVariable {
    /// The default perturbation set, in reporting order.
    pub const ALL: [PerturbationVariable; 5] = [
        PerturbationVariable::FobPrice,
        PerturbationVariable::TariffRate,
        PerturbationVariable::VatRate,
        PerturbationVariable::BaseFreight,
        PerturbationVariable::OptimisationFactor,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PerturbationVariable::FobPrice => "FOB price",
            PerturbationVariable::TariffRate => "Tariff rate",
            PerturbationVariable::VatRate => "VAT rate",
            PerturbationVariable::BaseFreight => "Base freight",
            PerturbationVariable::OptimisationFactor => "Optimisation factor",
        }
    }

    /// Return a clone of `snapshot` with this variable scaled by
    /// `1 + step`.
    fn perturb<T: Float>(&self, snapshot: &CostSnapshot<T>, step: T) -> CostSnapshot<T> {
        let factor = T::one() + step;
        let mut perturbed = snapshot.clone();
        match self {
            PerturbationVariable::FobPrice => {
                perturbed.transaction.fob_price = snapshot.transaction.fob_price * factor;
            }
            PerturbationVariable::TariffRate => {
                perturbed.transaction.tariff_rate =
                    Rate::from_fraction(snapshot.transaction.tariff_rate.fraction() * factor);
            }
            PerturbationVariable::VatRate => {
                perturbed.transaction.vat_rate =
                    Rate::from_fraction(snapshot.transaction.vat_rate.fraction() * factor);
            }
            PerturbationVariable::BaseFreight => {
                perturbed.advanced.base_freight = snapshot.advanced.base_freight * factor;
            }
            PerturbationVariable::OptimisationFactor => {
                perturbed.advanced.optimisation_factor =
                    snapshot.advanced.optimisation_factor * factor;
            }
        }
        perturbed
    }
}

/// Elasticity matrix: one row per perturbed variable, one column per
/// cost component.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElasticityMatrix<T: Float> {
    /// Row labels.
    pub variables: Vec<PerturbationVariable>,
    /// Column labels.
    pub components: Vec<CostComponent>,
    /// `values[i][j]` is the elasticity of `components[j]` with respect
    /// to `variables[i]`.
    pub values: Vec<Vec<T>>,
}

impl<T: Float> ElasticityMatrix<T> {
    /// Elasticity of one component with respect to one variable, if
    /// both are present in the matrix.
    pub fn get(&self, variable: PerturbationVariable, component: CostComponent) -> Option<T> {
        let row = self.variables.iter().position(|&v| v == variable)?;
        let col = self.components.iter().position(|&c| c == component)?;
        Some(self.values[row][col])
    }
}

/// Compute the elasticity matrix for the selected variables and
/// components.
///
/// Each variable is perturbed in isolation by [`PERTURBATION_STEP`] and
/// the itemised compiler re-run; components with a zero base value
/// report an elasticity of 0 by contract.
///
/// # Examples
/// ```
/// use landed_model::breakdown::CostComponent;
/// use landed_model::params::CostSnapshot;
/// use landed_risk::elasticity::{elasticities, PerturbationVariable};
///
/// let snapshot = CostSnapshot::<f64>::default();
/// let matrix = elasticities(
///     &snapshot,
///     &PerturbationVariable::ALL,
///     &CostComponent::ALL,
/// );
///
/// // Direct goods respond one-for-one to the FOB price.
/// let eps = matrix
///     .get(PerturbationVariable::FobPrice, CostComponent::DirectGoods)
///     .unwrap();
/// assert!((eps - 1.0).abs() < 1e-9);
/// ```
pub fn elasticities<T: Float>(
    snapshot: &CostSnapshot<T>,
    variables: &[PerturbationVariable],
    components: &[CostComponent],
) -> ElasticityMatrix<T> {
    let step = T::from(PERTURBATION_STEP).unwrap();
    let base = compute_itemised(snapshot);

    let mut values = Vec::with_capacity(variables.len());
    for variable in variables {
        let perturbed = compute_itemised(&variable.perturb(snapshot, step));
        let row = components
            .iter()
            .map(|&component| {
                let base_value = base.component(component);
                let shifted = perturbed.component(component);
                safe_ratio(shifted - base_value, base_value) / step
            })
            .collect();
        values.push(row);
    }

    ElasticityMatrix {
        variables: variables.to_vec(),
        components: components.to_vec(),
        values,
    }
}
