//! The deterministic cost compiler.
//!
//! Two model modes exist because the costing methodology defines two
//! divergent formula sets under the same names. Each mode here is one
//! canonical formula set; the caller selects the mode explicitly via
//! [`compute_itemised`], [`compute_landed_value`], or [`CostModel`],
//! and the modes are never mixed.
//!
//! Both compilers are pure functions over an immutable snapshot:
//! identical inputs yield bit-identical breakdowns.

mod itemised;
mod landed_value;

pub use itemised::compute_itemised;
pub use landed_value::compute_landed_value;

use landed_core::types::DomainError;
use num_traits::Float;

use crate::breakdown::Breakdown;
use crate::params::CostSnapshot;

/// Reference distance for the freight attenuation term, in kilometres.
pub const REFERENCE_DISTANCE_KM: f64 = 5_000.0;

/// Exponent of the freight distance attenuation term.
pub const DISTANCE_ATTENUATION_EXPONENT: f64 = 0.3;

/// Day-count base for the financing term.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Model mode selector for callers that pick the formula set at
/// runtime.
///
/// # Examples
/// ```
/// use landed_model::compiler::CostModel;
/// use landed_model::params::CostSnapshot;
///
/// let snapshot = CostSnapshot::<f64>::default();
/// let breakdown = CostModel::Itemised.compute(&snapshot).unwrap();
/// assert!(breakdown.total() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CostModel {
    /// Six-component itemised model with weighted aggregation.
    Itemised,
    /// Landed-value model with the self-referential CIF solve.
    LandedValue,
}

impl CostModel {
    /// Evaluate the selected model over a snapshot.
    ///
    /// # Errors
    /// `DomainError::InsuranceRateSingular` in landed-value mode when
    /// the insurance rate is at or above 100%. Itemised mode is total
    /// and never fails.
    pub fn compute<T: Float>(&self, snapshot: &CostSnapshot<T>) -> Result<Breakdown<T>, DomainError> {
        match self {
            CostModel::Itemised => Ok(Breakdown::Itemised(compute_itemised(snapshot))),
            CostModel::LandedValue => {
                compute_landed_value(snapshot).map(Breakdown::LandedValue)
            }
        }
    }
}
