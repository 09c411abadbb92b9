//! # landed_optimiser
//!
//! Discrete order-size optimisation for the landed-cost engine.
//!
//! This crate sits beside the cost model in the workspace, answering one
//! inverse question: given a power-law order-size cost curve and a
//! minimum-demand constraint, which candidate order quantity minimises
//! the total cost?
//!
//! ## Modules
//!
//! - `scale`: the cost curve, the linear candidate scan, and the
//!   feasibility rules
//!
//! ## Example
//!
//! ```rust
//! use landed_optimiser::scale::{optimise, ScaleCurve};
//!
//! let curve = ScaleCurve::new(2_000.0_f64, 50.0, 0.8);
//! let best = optimise(&curve, &[10, 50, 100, 500], 60).unwrap();
//! assert_eq!(best.quantity, 100);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod scale;

mod error;

pub use error::OptimiserError;
pub use scale::{optimise, optimise_snapshot, OptimalOrder, ScaleCurve};
