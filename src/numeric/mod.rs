// ============================================================================
// Numeric Module
// Fixed-point currency arithmetic
// ============================================================================
//
// This module provides:
// - Money: non-negative amount stored as whole units plus sub-units
// - CurrencyError: Error types for construction, arithmetic and parsing
//
// Design principles:
// - No floating-point operations
// - Sub-units always normalized into [0, 100)
// - Checked arithmetic returns Result; operators panic on overflow

mod errors;
mod money;

pub use errors::{CurrencyError, CurrencyResult};
pub use money::Money;
