//! Component correlation estimation.
//!
//! Quantifies how strongly pairs of cost components co-vary under the
//! documented stochastic drivers. The estimate is a genuine Pearson
//! statistic over a seeded Monte-Carlo resample, so identical inputs
//! and seeds yield bit-identical matrices.
//!
//! ## Resampling scheme
//!
//! Three standard-normal drivers are drawn per scenario:
//!
//! - a CIF-level shock (relative σ from `var_cif` / `mean_cif`),
//!   applied to the FOB price and the base freight
//! - an exchange-rate shock (relative σ from `var_exchange_rate` /
//!   `mean_exchange_rate`), correlated with the CIF shock through the
//!   covariance term via a 2×2 Cholesky factor, applied to the
//!   local-currency operational fees (distribution, storage,
//!   additional insurance)
//! - a customs-expense shock (relative σ from `var_customs_expenses` /
//!   `mean_customs_expenses`), applied to the brokerage fee and the
//!   fixed customs fees
//!
//! Every scenario is scored with the itemised compiler and the six
//! component series are correlated pairwise.

use landed_core::math::safe_ratio;
use landed_model::breakdown::CostComponent;
use landed_model::compiler::compute_itemised;
use landed_model::params::CostSnapshot;

use crate::rng::SeededRng;

/// Default seed for reporting runs.
pub const DEFAULT_SEED: u64 = 42;

/// Default Monte-Carlo sample count.
pub const DEFAULT_SAMPLE_COUNT: usize = 2_048;

/// Qualitative strength band of a correlation value.
///
/// # Examples
/// ```
/// use landed_risk::correlation::{interpret, CorrelationBand};
///
/// assert_eq!(interpret(0.93), CorrelationBand::VeryHigh);
/// assert_eq!(interpret(-0.45), CorrelationBand::Moderate);
/// assert_eq!(interpret(0.05), CorrelationBand::VeryLow);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrelationBand {
    /// |r| ≥ 0.8.
    VeryHigh,
    /// 0.6 ≤ |r| < 0.8.
    High,
    /// 0.4 ≤ |r| < 0.6.
    Moderate,
    /// 0.2 ≤ |r| < 0.4.
    Low,
    /// |r| < 0.2.
    VeryLow,
}

impl CorrelationBand {
    /// Qualitative description of the band.
    pub fn description(&self) -> &'static str {
        match self {
            CorrelationBand::VeryHigh => "very high interdependence",
            CorrelationBand::High => "high interdependence",
            CorrelationBand::Moderate => "moderate interdependence",
            CorrelationBand::Low => "low interdependence",
            CorrelationBand::VeryLow => "very low interdependence",
        }
    }
}

/// Band a correlation value by magnitude.
pub fn interpret(correlation: f64) -> CorrelationBand {
    let magnitude = correlation.abs();
    if magnitude >= 0.8 {
        CorrelationBand::VeryHigh
    } else if magnitude >= 0.6 {
        CorrelationBand::High
    } else if magnitude >= 0.4 {
        CorrelationBand::Moderate
    } else if magnitude >= 0.2 {
        CorrelationBand::Low
    } else {
        CorrelationBand::VeryLow
    }
}

/// Symmetric unit-diagonal correlation matrix over the six cost
/// components.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CorrelationMatrix {
    /// Component order of rows and columns.
    pub components: Vec<CostComponent>,
    /// `values[i][j]` is the correlation between components `i` and
    /// `j`; the diagonal is exactly 1 and off-diagonals lie in
    /// [-1, 1].
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Correlation between two components, if both are present.
    pub fn get(&self, a: CostComponent, b: CostComponent) -> Option<f64> {
        let i = self.components.iter().position(|&c| c == a)?;
        let j = self.components.iter().position(|&c| c == b)?;
        Some(self.values[i][j])
    }
}

/// Pearson correlation of two equal-length series.
///
/// Degenerate series (zero variance, or fewer than two points) yield 0
/// by contract; the result is clamped to [-1, 1] against floating-point
/// drift.
///
/// # Examples
/// ```
/// use landed_risk::correlation::pearson;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [2.0, 4.0, 6.0, 8.0];
/// assert!((pearson(&x, &y) - 1.0).abs() < 1e-12);
///
/// let flat = [5.0, 5.0, 5.0, 5.0];
/// assert_eq!(pearson(&x, &flat), 0.0);
/// ```
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }

    let mean_x = x[..n].iter().sum::<f64>() / n as f64;
    let mean_y = y[..n].iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = x[i] - mean_x;
        let dy = y[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    (cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0)
}

/// Seeded Monte-Carlo correlation estimator.
///
/// # Examples
/// ```
/// use landed_model::params::CostSnapshot;
/// use landed_risk::correlation::CorrelationEstimator;
///
/// let snapshot = CostSnapshot::<f64>::default();
/// let estimator = CorrelationEstimator::default();
///
/// let first = estimator.component_correlations(&snapshot);
/// let second = estimator.component_correlations(&snapshot);
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorrelationEstimator {
    /// RNG seed; the matrix is a pure function of (seed, snapshot).
    pub seed: u64,
    /// Number of Monte-Carlo scenarios.
    pub samples: usize,
}

impl Default for CorrelationEstimator {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            samples: DEFAULT_SAMPLE_COUNT,
        }
    }
}

impl CorrelationEstimator {
    /// Create an estimator with an explicit seed and sample count.
    pub fn new(seed: u64, samples: usize) -> Self {
        Self { seed, samples }
    }

    /// Estimate the component correlation matrix for a snapshot.
    pub fn component_correlations(&self, snapshot: &CostSnapshot<f64>) -> CorrelationMatrix {
        let stochastic = &snapshot.stochastic;

        let rel_sd_cif = safe_ratio(stochastic.var_cif.max(0.0).sqrt(), stochastic.mean_cif);
        let rel_sd_fx = safe_ratio(
            stochastic.var_exchange_rate.max(0.0).sqrt(),
            stochastic.mean_exchange_rate,
        );
        let rel_sd_customs = safe_ratio(
            stochastic.var_customs_expenses.max(0.0).sqrt(),
            stochastic.mean_customs_expenses,
        );

        // Cholesky factor for the CIF/exchange pair. Negative variance
        // inputs are floored to zero here, which degenerates the pair
        // to independence rather than propagating NaN.
        let denominator =
            (stochastic.var_cif.max(0.0) * stochastic.var_exchange_rate.max(0.0)).sqrt();
        let rho = safe_ratio(stochastic.cov_cif_exchange, denominator).clamp(-1.0, 1.0);
        let rho_orthogonal = (1.0 - rho * rho).sqrt();

        let mut rng = SeededRng::from_seed(self.seed);
        let mut series: [Vec<f64>; 6] =
            std::array::from_fn(|_| Vec::with_capacity(self.samples));

        for _ in 0..self.samples {
            let z_cif = rng.gen_normal();
            let z_fx_raw = rng.gen_normal();
            let z_customs = rng.gen_normal();
            let z_fx = rho * z_cif + rho_orthogonal * z_fx_raw;

            let cif_shock = 1.0 + rel_sd_cif * z_cif;
            let fx_shock = 1.0 + rel_sd_fx * z_fx;
            let customs_shock = 1.0 + rel_sd_customs * z_customs;

            let mut scenario = snapshot.clone();
            scenario.transaction.fob_price *= cif_shock;
            scenario.advanced.base_freight *= cif_shock;
            scenario.advanced.local_distribution_fee *= fx_shock;
            scenario.advanced.daily_storage_fee *= fx_shock;
            scenario.advanced.additional_insurance *= fx_shock;
            scenario.advanced.customs_brokerage_fee *= customs_shock;
            scenario.advanced.fixed_customs_fees *= customs_shock;

            let breakdown = compute_itemised(&scenario);
            for (slot, value) in series.iter_mut().zip(breakdown.components()) {
                slot.push(value);
            }
        }

        let mut values = vec![vec![0.0; 6]; 6];
        for i in 0..6 {
            values[i][i] = 1.0;
            for j in (i + 1)..6 {
                let r = pearson(&series[i], &series[j]);
                values[i][j] = r;
                values[j][i] = r;
            }
        }

        CorrelationMatrix {
            components: CostComponent::ALL.to_vec(),
            values,
        }
    }
}
