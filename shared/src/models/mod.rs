//! Data models
//!
//! Prices and totals are whole currency units (`i64`), matching the
//! catalog; only the fixed invoice adjustments carry fractions.

pub mod bill;
pub mod catalog;
pub mod store_info;

// Re-exports
pub use bill::*;
pub use catalog::*;
pub use store_info::*;
