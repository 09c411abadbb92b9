//! # landed_core: Foundation for the Landed-Cost Computation Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! landed_core serves as the bottom layer of the workspace, providing:
//! - Percentage normalisation: [`Rate`](types::Rate) (`types::rate`)
//! - Zero-denominator ratio rule: [`safe_ratio`](math::safe_ratio) (`math`)
//! - Error types: [`DomainError`](types::DomainError) (`types::error`)
//! - Generic floating-point trait re-export (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other landed_* crates, with minimal
//! external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use landed_core::math::safe_ratio;
//! use landed_core::types::Rate;
//!
//! // Rates are normalised from whole-number percentages exactly once.
//! let tariff = Rate::from_percent(12.0_f64);
//! assert_eq!(tariff.fraction(), 0.12);
//! assert_eq!(tariff.percent(), 12.0);
//!
//! // Ratios with a zero denominator resolve to zero by contract.
//! assert_eq!(safe_ratio(5.0_f64, 0.0), 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests {
    #[test]
    fn it_works() {
        assert_eq!(2 + 2, 4);
    }
}
