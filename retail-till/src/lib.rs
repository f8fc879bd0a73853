//! Retail Till - single-counter billing with a Bluetooth receipt printer
//!
//! # Module layout
//!
//! ```text
//! retail-till/src/
//! ├── core/       # config, errors
//! ├── billing/    # catalog loading, bill state reducer
//! ├── printing/   # receipt renderer, print worker, notices, views
//! ├── repl/       # command parsing and the till session
//! └── utils/      # logging
//! ```

pub mod billing;
pub mod core;
pub mod printing;
pub mod repl;
pub mod utils;

pub use billing::{BillAction, BillState, load_catalog};
pub use core::{Config, TillError, TillResult};
pub use printing::{Notice, PrintHandle, PrintSettings, PrintWorker};
pub use repl::{Command, Outcome, Session};
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
  ____      _        _ _   _____ _ _ _
 |  _ \ ___| |_ __ _(_) | |_   _(_) | |
 | |_) / _ \ __/ _` | | |   | | | | | |
 |  _ <  __/ || (_| | | |   | | | | | |
 |_| \_\___|\__\__,_|_|_|   |_| |_|_|_|
    "#
    );
}
