// ============================================================================
// Currency Errors
// Error types for currency construction, arithmetic and parsing
// ============================================================================

use std::fmt;

/// Errors that can occur when building or combining currency values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurrencyError {
    /// Unit count exceeded u64::MAX
    Overflow,
    /// A negative unit or sub-unit component was supplied
    NegativeAmount,
    /// More than two fractional digits
    PrecisionLoss,
    /// Input string could not be parsed as an amount
    InvalidInput,
}

impl fmt::Display for CurrencyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurrencyError::Overflow => {
                write!(f, "arithmetic overflow: unit count exceeded maximum value")
            },
            CurrencyError::NegativeAmount => {
                write!(f, "negative amount: currency values cannot be negative")
            },
            CurrencyError::PrecisionLoss => write!(
                f,
                "precision loss: amounts carry at most two fractional digits"
            ),
            CurrencyError::InvalidInput => write!(f, "invalid input: could not parse amount"),
        }
    }
}

impl std::error::Error for CurrencyError {}

/// Result type alias for currency operations
pub type CurrencyResult<T> = Result<T, CurrencyError>;
