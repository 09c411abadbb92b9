//! # landed_model: Cost Model Layer
//!
//! Parameter snapshots and the deterministic cost compiler for the
//! landed-cost engine.
//!
//! This crate provides:
//! - Immutable parameter snapshots ([`params::CostSnapshot`] and its
//!   sections)
//! - The itemised six-component cost model
//!   ([`compiler::compute_itemised`])
//! - The simpler landed-value model with the self-referential CIF
//!   closed-form solve ([`compiler::compute_landed_value`])
//! - Breakdown output types ([`breakdown`])
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            landed_model (L2)            │
//! ├─────────────────────────────────────────┤
//! │  params/     - snapshot sections        │
//! │  breakdown/  - CostComponent, outputs   │
//! │  compiler/   - itemised + landed-value  │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            landed_core (L1)             │
//! │  Rate, safe_ratio, DomainError          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Every entry point is a pure function over an immutable snapshot:
//! no I/O, no shared state, no randomness. Calling a compiler twice
//! with the same snapshot yields bit-identical breakdowns, which is
//! what makes the finite-difference analytics in the layer above
//! reproducible.
//!
//! ## Example
//!
//! ```
//! use landed_model::params::CostSnapshot;
//! use landed_model::compiler::compute_itemised;
//!
//! let snapshot = CostSnapshot::<f64>::default();
//! let breakdown = compute_itemised(&snapshot);
//!
//! assert!(breakdown.total_acquisition_cost > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod breakdown;
pub mod compiler;
pub mod params;

pub use breakdown::{Breakdown, CostComponent, ItemisedBreakdown, LandedValueBreakdown};
pub use compiler::{compute_itemised, compute_landed_value, CostModel};
pub use params::CostSnapshot;
