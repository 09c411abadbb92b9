//! # landed_risk: Analytics Layer
//!
//! Risk and sensitivity analytics over the deterministic cost model.
//!
//! This crate provides:
//! - Expected value and variance propagation for the stochastic cost
//!   model (`propagation`)
//! - Finite-difference elasticity matrices (`elasticity`)
//! - Deterministic, seeded component correlation matrices
//!   (`correlation`)
//! - A seeded RNG wrapper for reproducible resampling (`rng`)
//! - Rayon batch evaluation of independent snapshots (`parallel`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            landed_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  propagation/ - E, Var, CV, precision   │
//! │  elasticity/  - perturb-recompute       │
//! │  correlation/ - seeded MC + Pearson     │
//! │  parallel/    - Rayon batch scoring     │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            landed_model (L2)            │
//! │  Deterministic cost compiler            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Everything here is deterministic: the elasticity analyser re-invokes
//! the pure compiler on perturbed clones of the snapshot, and the
//! correlation estimator draws its Monte-Carlo resample from a
//! caller-supplied seed, so repeated calls with identical inputs yield
//! identical matrices.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod correlation;
pub mod elasticity;
pub mod parallel;
pub mod propagation;
pub mod rng;

pub use correlation::{
    interpret, CorrelationBand, CorrelationEstimator, CorrelationMatrix, DEFAULT_SAMPLE_COUNT,
    DEFAULT_SEED,
};
pub use elasticity::{elasticities, ElasticityMatrix, PerturbationVariable, PERTURBATION_STEP};
pub use parallel::{evaluate_batch, ParallelConfig};
pub use propagation::{propagate, RiskSummary};
pub use rng::SeededRng;
