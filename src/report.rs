// ============================================================================
// Report
// Adds two sample amounts and reports the total and comparison result
// ============================================================================

use crate::numeric::{CurrencyResult, Money};
use std::error::Error;
use std::io::{self, Write};

/// Result of adding two amounts and checking the sum against an expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Sum of the two operands
    pub total: Money,

    /// Value the total is compared against
    pub expected: Money,
}

impl Summary {
    /// Add `first` and `second` and pair the total with `expected`.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum does not fit.
    pub fn new(first: Money, second: Money, expected: Money) -> CurrencyResult<Self> {
        let total = first.checked_add(second)?;
        tracing::debug!(%first, %second, %total, "added amounts");
        Ok(Self { total, expected })
    }

    /// $5.75 + $3.50, compared against $9.25.
    pub fn sample() -> CurrencyResult<Self> {
        Self::new(Money::new(5, 75)?, Money::new(3, 50)?, Money::new(9, 25)?)
    }

    /// True when the total equals the expected amount.
    pub fn matches(&self) -> bool {
        self.total == self.expected
    }

    /// Write the two report lines.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Total: {}", self.total)?;
        if self.matches() {
            writeln!(out, "Equal to {}", self.expected)
        } else {
            writeln!(out, "Not equal")
        }
    }
}

/// Run the sample report against `out`.
pub fn run<W: Write>(out: &mut W) -> Result<(), Box<dyn Error>> {
    let summary = Summary::sample()?;
    summary.write_to(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(summary: &Summary) -> String {
        let mut buf = Vec::new();
        summary.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_sample_summary() {
        let summary = Summary::sample().unwrap();
        assert_eq!(summary.total, Money::new(9, 25).unwrap());
        assert!(summary.matches());
    }

    #[test]
    fn test_write_equal() {
        let summary = Summary::sample().unwrap();
        assert_eq!(render(&summary), "Total: $9.25\nEqual to $9.25\n");
    }

    #[test]
    fn test_write_not_equal() {
        let summary = Summary::new(
            Money::new(1, 0).unwrap(),
            Money::new(0, 5).unwrap(),
            Money::new(9, 25).unwrap(),
        )
        .unwrap();
        assert!(!summary.matches());
        assert_eq!(render(&summary), "Total: $1.05\nNot equal\n");
    }

    #[test]
    fn test_new_overflow() {
        let result = Summary::new(Money::MAX, Money::from_subunits(1), Money::ZERO);
        assert!(result.is_err());
    }
}
