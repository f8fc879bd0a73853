//! Shared types for the retail till
//!
//! Data model used by the printer-facing renderer and the till front-end:
//! catalog entries, bill lines, bills, saved bills and store details.

pub mod models;
pub mod money;

// Re-exports
pub use models::{Bill, BillItem, Catalog, CatalogItem, InvoiceAdjustment, SavedBill, StoreInfo};
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
