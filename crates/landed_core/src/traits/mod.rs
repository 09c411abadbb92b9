//! Core traits for generic numeric computation.
//!
//! The cost model layer is written against the [`Float`] trait so the same
//! closed-form equations evaluate for `f64`, `f32`, or any other type
//! satisfying the trait. All dispatch is static; the equations contain no
//! trait objects.

/// Generic floating-point trait for numeric computations.
///
/// This trait provides a unified interface over standard floating-point
/// types (`f64`, `f32`).
///
/// # Examples
/// ```
/// use landed_core::traits::Float;
///
/// fn compound<T: Float>(rate: T, periods: T) -> T {
///     (T::one() + rate).powf(periods)
/// }
///
/// let growth: f64 = compound(0.08, 0.25);
/// assert!((growth - 1.0194).abs() < 1e-3);
/// ```
pub use num_traits::Float;
