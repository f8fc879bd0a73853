//! Line-oriented till front-end

pub mod command;
pub mod session;

pub use command::{Command, HELP};
pub use session::{Outcome, Session};
