//! Billing: catalog loading and the bill state reducer

pub mod catalog;
pub mod state;

pub use catalog::load_catalog;
pub use state::{BillAction, BillState};
