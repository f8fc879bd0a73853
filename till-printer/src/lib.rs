//! # till-printer
//!
//! Bluetooth receipt printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building
//! - ASCII encoding for serial receipt printers
//! - Paired device discovery
//! - RFCOMM serial transport (bound `/dev/rfcommN` nodes)
//! - Connection state of the single active printer
//!
//! Business logic (WHAT to print) stays in application code:
//! - Receipt layout → retail-till
//!
//! ## Example
//!
//! ```ignore
//! use till_printer::{EscPosBuilder, PrinterAdapter, RfcommConnector, find_printer};
//!
//! let mut b = EscPosBuilder::new(32);
//! b.line("Retail Invoice");
//! b.line("Token Number: 1");
//! b.cut_feed(0x10);
//!
//! let device = find_printer(&devices, "Printer").expect("paired printer");
//! let mut adapter = PrinterAdapter::new(RfcommConnector::new());
//! adapter.connect(device).await?;
//! adapter.print(&b.build()).await?;
//! ```

mod adapter;
mod device;
mod encoding;
mod environment;
mod error;
mod escpos;
mod transport;

// Re-exports
pub use adapter::{ConnectionState, PrinterAdapter};
pub use device::{PairedDevice, SERIAL_PORT_PROFILE, find_printer, parse_paired_devices, select_device};
pub use encoding::{ascii_width, encode_ascii, pad_ascii, truncate_ascii};
pub use environment::{Availability, SysfsProbe};
pub use error::{PrintError, PrintResult};
pub use escpos::EscPosBuilder;
pub use transport::{Connector, RfcommConnector};
