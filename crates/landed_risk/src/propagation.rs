//! Expected value and variance propagation for the stochastic model.
//!
//! ## Mathematical formulas
//!
//! ```text
//! E[C]   = μ_CIF · (1 + μ_τa) · (1 + μ_τv) · μ_FX + μ_GA + μ_CO
//! Var[C] = σ²_CIF + σ²_FX + σ²_GA + 2 · Cov(CIF, FX)
//! σ[C]   = √Var[C]
//! CV%    = σ[C] / E[C] · 100          (0 when E[C] = 0)
//! precision = max(0, 100 − |CV%|)
//! ```
//!
//! The variance line is a linear propagation approximation under a
//! nonlinear mean formula: the tax-rate and exchange-rate products are
//! not expanded to first order, the input variances are summed as-is.
//! This is a modelling simplification inherited from the methodology,
//! not a numerical defect.

use landed_core::math::safe_ratio;
use landed_core::types::DomainError;
use landed_model::params::StochasticParameters;
use num_traits::Float;

/// Summary statistics of the propagated total import cost.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskSummary<T: Float> {
    /// Expected total cost.
    pub expected: T,
    /// Propagated variance.
    pub variance: T,
    /// Standard deviation.
    pub std_dev: T,
    /// Coefficient of variation, in percent (0 when the expected value
    /// is zero).
    pub coefficient_of_variation_pct: T,
    /// Precision index: `max(0, 100 − |CV%|)`.
    pub precision_index: T,
}

/// Propagate the stochastic parameters into a cost risk summary.
///
/// # Errors
/// `DomainError::NegativeVariance` when a variance input, or the
/// propagated variance total, is below zero: the standard deviation
/// would be undefined, so the failure is raised eagerly instead of
/// yielding `NaN`.
///
/// # Examples
/// ```
/// use landed_model::params::StochasticParameters;
/// use landed_risk::propagation::propagate;
///
/// let summary = propagate(&StochasticParameters::<f64>::default()).unwrap();
/// assert!(summary.expected > 0.0);
/// assert!(summary.precision_index >= 0.0 && summary.precision_index <= 100.0);
/// ```
pub fn propagate<T: Float>(params: &StochasticParameters<T>) -> Result<RiskSummary<T>, DomainError> {
    for variance in [
        params.var_cif,
        params.var_exchange_rate,
        params.var_customs_expenses,
    ] {
        if variance < T::zero() {
            return Err(DomainError::NegativeVariance {
                variance: variance.to_f64().unwrap_or(f64::NAN),
            });
        }
    }

    let expected = params.mean_cif
        * params.mean_tariff_rate.uplift()
        * params.mean_vat_rate.uplift()
        * params.mean_exchange_rate
        + params.mean_customs_expenses
        + params.mean_operational_expenses;

    let two = T::from(2.0).unwrap();
    let variance = params.var_cif
        + params.var_exchange_rate
        + params.var_customs_expenses
        + two * params.cov_cif_exchange;

    // A sufficiently negative covariance can push the linear total
    // below zero; the square root is then undefined.
    if variance < T::zero() {
        return Err(DomainError::NegativeVariance {
            variance: variance.to_f64().unwrap_or(f64::NAN),
        });
    }

    let std_dev = variance.sqrt();
    let hundred = T::from(100.0).unwrap();
    let coefficient_of_variation_pct = safe_ratio(std_dev, expected) * hundred;
    let precision_index = (hundred - coefficient_of_variation_pct.abs()).max(T::zero());

    Ok(RiskSummary {
        expected,
        variance,
        std_dev,
        coefficient_of_variation_pct,
        precision_index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use landed_core::types::Rate;

    #[test]
    fn test_reference_parameters() {
        let params = StochasticParameters::<f64>::default();
        let summary = propagate(&params).unwrap();

        // 10 854 × 1.12 × 1.10 × 8 000 + 200 + 100
        let expected = 10_854.0 * 1.12 * 1.10 * 8_000.0 + 300.0;
        assert_relative_eq!(summary.expected, expected, max_relative = 1e-12);

        // 100 000 + 10 000 + 1 000 + 2 × 1 500
        assert_relative_eq!(summary.variance, 114_000.0, max_relative = 1e-12);
        assert_relative_eq!(summary.std_dev, 114_000.0f64.sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn test_cv_and_precision() {
        let params = StochasticParameters::<f64>::default();
        let summary = propagate(&params).unwrap();

        let cv = summary.std_dev / summary.expected * 100.0;
        assert_relative_eq!(summary.coefficient_of_variation_pct, cv, max_relative = 1e-12);
        assert_relative_eq!(
            summary.precision_index,
            100.0 - cv.abs(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_expected_yields_zero_cv() {
        let mut params = StochasticParameters::<f64>::default();
        params.mean_cif = 0.0;
        params.mean_customs_expenses = 0.0;
        params.mean_operational_expenses = 0.0;

        let summary = propagate(&params).unwrap();
        assert_eq!(summary.expected, 0.0);
        assert_eq!(summary.coefficient_of_variation_pct, 0.0);
        assert_eq!(summary.precision_index, 100.0);
    }

    #[test]
    fn test_negative_variance_rejected() {
        let mut params = StochasticParameters::<f64>::default();
        params.var_cif = -1.0;
        let err = propagate(&params).unwrap_err();
        assert_eq!(err, DomainError::NegativeVariance { variance: -1.0 });
    }

    #[test]
    fn test_negative_total_from_covariance_rejected() {
        let mut params = StochasticParameters::<f64>::default();
        params.var_cif = 1_000.0;
        params.var_exchange_rate = 0.0;
        params.var_customs_expenses = 0.0;
        params.cov_cif_exchange = -1_000.0;

        let err = propagate(&params).unwrap_err();
        assert!(matches!(err, DomainError::NegativeVariance { .. }));
    }

    #[test]
    fn test_zero_variances_accepted() {
        let mut params = StochasticParameters::<f64>::default();
        params.var_cif = 0.0;
        params.var_exchange_rate = 0.0;
        params.var_customs_expenses = 0.0;
        params.cov_cif_exchange = 0.0;

        let summary = propagate(&params).unwrap();
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.coefficient_of_variation_pct, 0.0);
        assert_eq!(summary.precision_index, 100.0);
    }

    #[test]
    fn test_large_cv_floors_precision_at_zero() {
        let mut params = StochasticParameters::<f64>::default();
        params.mean_cif = 0.0001;
        params.mean_exchange_rate = 1.0;
        params.mean_tariff_rate = Rate::zero();
        params.mean_vat_rate = Rate::zero();
        params.mean_customs_expenses = 0.0;
        params.mean_operational_expenses = 0.0;

        let summary = propagate(&params).unwrap();
        assert!(summary.coefficient_of_variation_pct > 100.0);
        assert_eq!(summary.precision_index, 0.0);
    }
}
