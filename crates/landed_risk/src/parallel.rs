//! Rayon batch evaluation of independent snapshots.
//!
//! Snapshots are immutable values and the compiler is pure, so scoring
//! a scenario grid is embarrassingly parallel. Small batches skip the
//! thread pool: below the configured threshold the fork-join overhead
//! costs more than the work.

use landed_model::breakdown::ItemisedBreakdown;
use landed_model::compiler::compute_itemised;
use landed_model::params::CostSnapshot;
use rayon::prelude::*;

/// Configuration for batch evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Batches smaller than this are evaluated sequentially.
    pub min_parallel_batch: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            min_parallel_batch: 8,
        }
    }
}

/// Evaluate every snapshot with the itemised compiler.
///
/// Output order matches input order, and each breakdown is identical to
/// what a sequential [`compute_itemised`] call would produce.
///
/// # Examples
/// ```
/// use landed_model::params::CostSnapshot;
/// use landed_risk::parallel::{evaluate_batch, ParallelConfig};
///
/// let snapshots = vec![CostSnapshot::<f64>::default(); 4];
/// let breakdowns = evaluate_batch(&snapshots, ParallelConfig::default());
/// assert_eq!(breakdowns.len(), 4);
/// ```
pub fn evaluate_batch(
    snapshots: &[CostSnapshot<f64>],
    config: ParallelConfig,
) -> Vec<ItemisedBreakdown<f64>> {
    if snapshots.len() < config.min_parallel_batch {
        snapshots.iter().map(compute_itemised).collect()
    } else {
        snapshots.par_iter().map(compute_itemised).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_grid(n: usize) -> Vec<CostSnapshot<f64>> {
        (0..n)
            .map(|i| {
                let mut snapshot = CostSnapshot::default();
                snapshot.transaction.fob_price = 1_000.0 * (i + 1) as f64;
                snapshot
            })
            .collect()
    }

    #[test]
    fn test_empty_batch() {
        let breakdowns = evaluate_batch(&[], ParallelConfig::default());
        assert!(breakdowns.is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let snapshots = scenario_grid(32);
        let parallel = evaluate_batch(&snapshots, ParallelConfig::default());
        let sequential: Vec<_> = snapshots.iter().map(compute_itemised).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_small_batch_stays_sequential_and_correct() {
        let snapshots = scenario_grid(3);
        let config = ParallelConfig {
            min_parallel_batch: 8,
        };
        let breakdowns = evaluate_batch(&snapshots, config);
        assert_eq!(breakdowns.len(), 3);
        assert_eq!(breakdowns[0], compute_itemised(&snapshots[0]));
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let snapshots = scenario_grid(16);
        let breakdowns = evaluate_batch(&snapshots, ParallelConfig::default());
        for (snapshot, breakdown) in snapshots.iter().zip(&breakdowns) {
            assert_eq!(breakdown, &compute_itemised(snapshot));
        }
    }
}
