// ============================================================================
// Money
// Fixed-point currency value with whole units and normalized sub-units
// ============================================================================

use super::errors::{CurrencyError, CurrencyResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::ops::Add;

/// Non-negative monetary amount stored as whole units plus sub-units.
///
/// Sub-units are always normalized into `[0, 100)`: any excess passed to a
/// constructor is carried into the unit part. Values are immutable once built;
/// arithmetic produces new values.
///
/// Field order makes the derived ordering numeric.
///
/// # Example
/// ```
/// use currency_value::numeric::Money;
///
/// let a = Money::new(5, 75)?;
/// let b = Money::new(3, 50)?;
/// let total = a + b;
/// assert_eq!(total, Money::new(9, 25)?);
/// assert_eq!(total.to_string(), "$9.25");
/// # Ok::<(), currency_value::numeric::CurrencyError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money {
    units: u64,
    subunits: u8,
}

impl Money {
    /// Sub-units per whole unit
    pub const SUBUNITS_PER_UNIT: u64 = 100;

    /// Prefix used when formatting
    pub const SYMBOL: &'static str = "$";

    /// Zero value
    pub const ZERO: Self = Self {
        units: 0,
        subunits: 0,
    };

    /// Maximum representable value
    pub const MAX: Self = Self {
        units: u64::MAX,
        subunits: 99,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from units and sub-units, carrying sub-units >= 100 into units.
    ///
    /// # Errors
    /// Returns `Overflow` if the carried unit count exceeds `u64::MAX`.
    #[inline]
    pub fn new(units: u64, subunits: u64) -> CurrencyResult<Self> {
        let carry = subunits / Self::SUBUNITS_PER_UNIT;
        if carry > 0 {
            tracing::trace!(units, subunits, carry, "carrying sub-units into units");
        }

        let units = units.checked_add(carry).ok_or(CurrencyError::Overflow)?;
        Ok(Self {
            units,
            subunits: (subunits % Self::SUBUNITS_PER_UNIT) as u8,
        })
    }

    /// Create from signed parts, rejecting any negative component.
    ///
    /// # Errors
    /// - `NegativeAmount` if either part is below zero
    /// - `Overflow` if the carried unit count exceeds `u64::MAX`
    pub fn from_signed_parts(units: i64, subunits: i64) -> CurrencyResult<Self> {
        let units = u64::try_from(units).map_err(|_| CurrencyError::NegativeAmount)?;
        let subunits = u64::try_from(subunits).map_err(|_| CurrencyError::NegativeAmount)?;
        Self::new(units, subunits)
    }

    /// Create from a flat sub-unit count (e.g. cents).
    #[inline]
    pub const fn from_subunits(total: u64) -> Self {
        Self {
            units: total / Self::SUBUNITS_PER_UNIT,
            subunits: (total % Self::SUBUNITS_PER_UNIT) as u8,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Whole units.
    #[inline]
    pub const fn units(self) -> u64 {
        self.units
    }

    /// Sub-units, always below 100.
    #[inline]
    pub const fn subunits(self) -> u8 {
        self.subunits
    }

    /// Total value expressed in sub-units.
    #[inline]
    pub const fn total_subunits(self) -> u128 {
        self.units as u128 * Self::SUBUNITS_PER_UNIT as u128 + self.subunits as u128
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.units == 0 && self.subunits == 0
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the unit count exceeds `u64::MAX`.
    #[inline]
    pub fn checked_add(self, rhs: Self) -> CurrencyResult<Self> {
        let subunits = u64::from(self.subunits) + u64::from(rhs.subunits);

        self.units
            .checked_add(rhs.units)
            .and_then(|units| units.checked_add(subunits / Self::SUBUNITS_PER_UNIT))
            .map(|units| Self {
                units,
                subunits: (subunits % Self::SUBUNITS_PER_UNIT) as u8,
            })
            .ok_or_else(|| {
                tracing::debug!(lhs = %self, rhs = %rhs, "currency addition overflow");
                CurrencyError::Overflow
            })
    }

    /// Sum a sequence of amounts, stopping at the first overflow.
    pub fn checked_sum<I>(amounts: I) -> CurrencyResult<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        amounts.into_iter().try_fold(Self::ZERO, Self::checked_add)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Money {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// Infallible Add for ergonomics (panics on overflow - use checked_add in production)
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Money addition overflow")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{:02}", Self::SYMBOL, self.units, self.subunits)
    }
}

impl fmt::Debug for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Money({}, units={}, subunits={})",
            self, self.units, self.subunits
        )
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Money {
    /// Convert from rust_decimal::Decimal.
    ///
    /// # Errors
    /// - `NegativeAmount` if the value is below zero
    /// - `PrecisionLoss` if the value has significant digits past two places
    /// - `Overflow` if the unit part does not fit in a u64
    pub fn from_decimal(d: Decimal) -> CurrencyResult<Self> {
        if d.is_sign_negative() && !d.is_zero() {
            return Err(CurrencyError::NegativeAmount);
        }
        // -0 keeps its sign bit, which to_u64 refuses
        let d = d.abs();
        if d.round_dp(2) != d {
            return Err(CurrencyError::PrecisionLoss);
        }

        let units = d.trunc().to_u64().ok_or(CurrencyError::Overflow)?;
        let subunits = (d.fract() * Decimal::ONE_HUNDRED)
            .to_u64()
            .ok_or(CurrencyError::InvalidInput)?;

        Self::new(units, subunits)
    }

    /// Convert to rust_decimal::Decimal with two decimal places.
    pub fn to_decimal(self) -> Decimal {
        // u64::MAX * 100 + 99 is well inside Decimal's 96-bit mantissa
        Decimal::from_i128_with_scale(self.total_subunits() as i128, 2)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Money {
    type Err = CurrencyError;

    /// Parse from a decimal string with an optional currency symbol.
    ///
    /// # Examples
    /// - "$9.25" -> $9.25
    /// - "9.5" -> $9.50
    /// - "42" -> $42.00
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unsigned = s.strip_prefix(Self::SYMBOL).unwrap_or(s);
        if s.starts_with('-') || unsigned.starts_with('-') {
            return Err(CurrencyError::NegativeAmount);
        }
        let s = unsigned;

        let (int_str, frac_str) = match s.split_once('.') {
            Some((int_str, frac_str)) => (int_str, Some(frac_str)),
            None => (s, None),
        };

        if int_str.is_empty() || !int_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CurrencyError::InvalidInput);
        }
        // Digits only, so the only way parsing fails is a value past u64::MAX
        let units: u64 = int_str.parse().map_err(|_| CurrencyError::Overflow)?;

        let subunits: u64 = match frac_str {
            None | Some("") => 0,
            Some(frac) => {
                if !frac.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(CurrencyError::InvalidInput);
                }
                if frac.len() > 2 {
                    return Err(CurrencyError::PrecisionLoss);
                }
                // "5" means fifty sub-units, not five
                format!("{:0<2}", frac)
                    .parse()
                    .map_err(|_| CurrencyError::InvalidInput)?
            },
        };

        Self::new(units, subunits)
    }
}

// ============================================================================
// Serialization
// ============================================================================

// Encoded as the display string so decoding goes through FromStr and keeps
// sub-units normalized.
#[cfg(feature = "serde")]
impl serde::Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Tests
// ============================================================================
