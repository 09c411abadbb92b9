//! Percentage rate normalisation.
//!
//! Rate-valued inputs arrive as whole-number percentages (a tariff of 12%
//! is entered as `12.0`). Every equation in the model layer consumes the
//! fractional form. Dividing by 100 at each use site invites
//! double-scaling defects, so the division happens exactly once, here, at
//! the construction boundary.

use crate::traits::Float;

/// A percentage rate stored in fractional form.
///
/// Construct with [`Rate::from_percent`] for whole-number percentage
/// inputs, or [`Rate::from_fraction`] when the value is already a
/// fraction. Consumers read [`Rate::fraction`]; the original percentage
/// is recoverable via [`Rate::percent`].
///
/// Negative rates are representable. The type does not validate domain
/// plausibility; singular values (an insurance rate of 100% in the
/// self-referential CIF solve) are rejected by the operations that
/// cannot tolerate them, not here.
///
/// # Examples
/// ```
/// use landed_core::types::Rate;
///
/// let vat = Rate::from_percent(19.0_f64);
/// assert_eq!(vat.fraction(), 0.19);
/// assert_eq!(vat.percent(), 19.0);
///
/// let freight = Rate::from_fraction(0.08_f64);
/// assert_eq!(freight.percent(), 8.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Rate<T: Float> {
    fraction: T,
}

impl<T: Float> Rate<T> {
    /// Create a rate from a whole-number percentage (12% as `12.0`).
    #[inline]
    pub fn from_percent(percent: T) -> Self {
        Self {
            fraction: percent / T::from(100.0).unwrap(),
        }
    }

    /// Create a rate from a fractional value (12% as `0.12`).
    #[inline]
    pub fn from_fraction(fraction: T) -> Self {
        Self { fraction }
    }

    /// A zero rate.
    #[inline]
    pub fn zero() -> Self {
        Self {
            fraction: T::zero(),
        }
    }

    /// The fractional form consumed by the model equations.
    #[inline]
    pub fn fraction(&self) -> T {
        self.fraction
    }

    /// The whole-number percentage form.
    #[inline]
    pub fn percent(&self) -> T {
        self.fraction * T::from(100.0).unwrap()
    }

    /// `1 + fraction`, the multiplicative uplift applied by surcharges.
    #[inline]
    pub fn uplift(&self) -> T {
        T::one() + self.fraction
    }
}

impl<T: Float> Default for Rate<T> {
    fn default() -> Self {
        Self::zero()
    }
}
