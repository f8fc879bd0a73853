//! Till command parsing
//!
//! Item and line numbers are typed 1-based and stored 0-based.

use crate::core::{TillError, TillResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Catalog,
    /// Catalog index and the quantity exactly as typed
    Add { index: usize, quantity: String },
    Increment(usize),
    Decrement(usize),
    SetQuantity { line: usize, quantity: u32 },
    Delete(usize),
    Token(String),
    Show,
    Invoice,
    Print,
    Save,
    Saved { json: bool },
    Devices,
    Connect(Option<String>),
    Disconnect,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  catalog               - List items
  add <item> <qty>      - Add an item to the bill
  inc <line>            - Increase quantity by one
  dec <line>            - Decrease quantity by one
  qty <line> <n>        - Set quantity
  del <line>            - Remove a line
  token <n>             - Set the token number
  show                  - Show the current bill
  invoice               - Show the seller bill and invoice
  print                 - Print the bill and start the next one
  save                  - Save the bill without printing
  saved [--json]        - List saved bills
  devices               - List paired devices
  connect [name]        - Connect to the printer
  disconnect            - Disconnect the printer
  status                - Show printer status
  help                  - This text
  quit                  - Exit";

impl Command {
    /// Parse one input line; `None` for a blank line
    pub fn parse(input: &str) -> TillResult<Option<Self>> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((&head, args)) = parts.split_first() else {
            return Ok(None);
        };

        let cmd = match (head.to_ascii_lowercase().as_str(), args) {
            ("catalog" | "items", []) => Command::Catalog,
            ("add", [index, quantity]) => Command::Add {
                index: position(index)?,
                quantity: quantity.to_string(),
            },
            ("add", [index]) => Command::Add {
                index: position(index)?,
                quantity: "1".into(),
            },
            ("inc" | "+", [line]) => Command::Increment(position(line)?),
            ("dec" | "-", [line]) => Command::Decrement(position(line)?),
            ("qty", [line, quantity]) => Command::SetQuantity {
                line: position(line)?,
                quantity: quantity
                    .parse()
                    .map_err(|_| usage("quantity must be a whole number"))?,
            },
            ("del" | "rm", [line]) => Command::Delete(position(line)?),
            ("token", [token]) => Command::Token(token.to_string()),
            ("show" | "bill", []) => Command::Show,
            ("invoice", []) => Command::Invoice,
            ("print", []) => Command::Print,
            ("save", []) => Command::Save,
            ("saved", []) => Command::Saved { json: false },
            ("saved", ["--json"]) => Command::Saved { json: true },
            ("devices", []) => Command::Devices,
            ("connect", []) => Command::Connect(None),
            ("connect", name) => Command::Connect(Some(name.join(" "))),
            ("disconnect", []) => Command::Disconnect,
            ("status", []) => Command::Status,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit" | "q", []) => Command::Quit,
            (other, _) => {
                return Err(usage(&format!("unknown command or arguments: {} (try help)", other)));
            }
        };
        Ok(Some(cmd))
    }
}

fn position(text: &str) -> TillResult<usize> {
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(usage(&format!("expected a number from 1, got {}", text))),
    }
}

fn usage(message: &str) -> TillError {
    TillError::Command(message.to_string())
}
