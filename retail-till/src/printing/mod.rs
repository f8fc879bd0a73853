//! Receipt printing
//!
//! - Receipt rendering: bill to ESC/POS bytes
//! - Print worker: owns the printer connection on a background task
//! - Views: on-screen invoice and bill text

pub mod invoice;
pub mod notice;
pub mod renderer;
pub mod worker;

pub use invoice::{InvoiceView, bill_view, catalog_view, saved_view};
pub use notice::Notice;
pub use renderer::ReceiptRenderer;
pub use worker::{PrintCommand, PrintHandle, PrintSettings, PrintWorker};
