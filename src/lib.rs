// ============================================================================
// Currency Value Library
// Fixed-point currency amounts with operator overloading
// ============================================================================

//! # Currency Value
//!
//! A small fixed-point currency type: whole units plus sub-units, with the
//! sub-unit part always normalized into `[0, 100)`.
//!
//! ## Features
//!
//! - **Carry normalization** on construction (`Money::new(0, 150)` is `$1.50`)
//! - **Operator overloading** for `+`, `==` and `Display`
//! - **Checked arithmetic** returning `CurrencyResult`
//! - **Parsing** from `"$9.25"`-style strings and `rust_decimal::Decimal`
//!
//! ## Example
//!
//! ```rust
//! use currency_value::prelude::*;
//!
//! let total = Money::new(5, 75)? + Money::new(3, 50)?;
//! println!("Total: {}", total);
//!
//! assert_eq!(total, Money::new(9, 25)?);
//! assert_eq!(total.to_string(), "$9.25");
//! # Ok::<(), CurrencyError>(())
//! ```

pub mod numeric;
pub mod report;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{CurrencyError, CurrencyResult, Money};
    pub use crate::report::Summary;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_report() {
        let mut out = Vec::new();
        crate::report::run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["Total: $9.25", "Equal to $9.25"]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_parsed_amounts_add_like_constructed_ones() {
        let parsed: Money = "$5.75".parse().unwrap();
        let total = parsed + Money::from_decimal(rust_decimal::Decimal::new(350, 2)).unwrap();

        assert_eq!(total, Money::new(9, 25).unwrap());
        assert_eq!(total.to_decimal(), rust_decimal::Decimal::new(925, 2));
    }
}
