//! Till session
//!
//! Owns the bill state and turns commands into reducer actions, printer
//! requests and screen text.

use super::command::{Command, HELP};
use crate::billing::{BillAction, BillState};
use crate::core::{Config, TillError, TillResult};
use crate::printing::{InvoiceView, PrintHandle, bill_view, catalog_view, saved_view};
use chrono::Local;
use shared::{Catalog, InvoiceAdjustment, StoreInfo};
use std::sync::Arc;
use till_printer::PairedDevice;

/// Result of one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

pub struct Session {
    state: BillState,
    printer: PrintHandle,
    devices: Vec<PairedDevice>,
    store: StoreInfo,
    adjustments: Vec<InvoiceAdjustment>,
    currency: String,
}

impl Session {
    pub fn new(config: &Config, catalog: Arc<Catalog>, printer: PrintHandle) -> Self {
        Self {
            state: BillState::new(catalog, config.first_token, config.clear_on_finalize),
            printer,
            devices: config.paired_devices.clone(),
            store: config.store.clone(),
            adjustments: config.adjustments.clone(),
            currency: config.screen_currency.clone(),
        }
    }

    pub fn state(&self) -> &BillState {
        &self.state
    }

    /// Run one command
    ///
    /// Errors are reported to the operator; the session stays usable.
    pub async fn execute(&mut self, cmd: Command) -> TillResult<Outcome> {
        let text = match cmd {
            Command::Catalog => catalog_view(self.state.catalog(), &self.currency),
            Command::Add { index, quantity } => {
                self.apply(BillAction::AddItem {
                    catalog_index: index,
                    quantity,
                });
                self.bill_text()
            }
            Command::Increment(line) => {
                let quantity = self.line(line)?.quantity.saturating_add(1);
                self.set_quantity(line, quantity)?
            }
            Command::Decrement(line) => {
                let quantity = self.line(line)?.quantity.saturating_sub(1);
                self.set_quantity(line, quantity)?
            }
            Command::SetQuantity { line, quantity } => self.set_quantity(line, quantity)?,
            Command::Delete(line) => {
                let item = self.line(line)?.clone();
                self.apply(BillAction::DeleteItem(item));
                self.bill_text()
            }
            Command::Token(text) => {
                self.apply(BillAction::EditToken(text));
                format!("Token Number: {}", self.state.token_number())
            }
            Command::Show => self.bill_text(),
            Command::Invoice => self.invoice_text(),
            Command::Print => self.print().await?,
            Command::Save => {
                let token = self.state.token_number();
                self.apply(BillAction::Finalize);
                format!("Bill {} saved\n\n{}", token, self.bill_text())
            }
            Command::Saved { json: true } => serde_json::to_string_pretty(self.state.saved())?,
            Command::Saved { json: false } => saved_view(self.state.saved(), &self.currency),
            Command::Devices => self.devices_text(),
            Command::Connect(name) => self.printer.connect(name).await?.to_string(),
            Command::Disconnect => self.printer.disconnect().await?.to_string(),
            Command::Status => self.printer.status().await?.to_string(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Output(text))
    }

    /// Show the invoice, print, then start the next bill
    ///
    /// The bill is finalized even when printing fails.
    async fn print(&mut self) -> TillResult<String> {
        let invoice = self.invoice_text();
        let bill = self.state.bill().clone();

        let notice = self.printer.print(bill).await;
        self.apply(BillAction::Finalize);

        Ok(format!("{}\n{}", invoice, notice?))
    }

    fn apply(&mut self, action: BillAction) {
        self.state = self.state.clone().apply(action);
    }

    fn line(&self, line: usize) -> TillResult<&shared::BillItem> {
        self.state
            .bill()
            .items
            .get(line)
            .ok_or_else(|| TillError::Command(format!("no line {} on the bill", line + 1)))
    }

    fn set_quantity(&mut self, line: usize, quantity: u32) -> TillResult<String> {
        let item = self.line(line)?.clone();
        self.apply(BillAction::UpdateQuantity { item, quantity });
        Ok(self.bill_text())
    }

    fn bill_text(&self) -> String {
        bill_view(self.state.bill(), &self.currency)
    }

    fn invoice_text(&self) -> String {
        InvoiceView::new(&self.store, &self.adjustments, &self.currency)
            .render(self.state.bill(), &Local::now())
    }

    fn devices_text(&self) -> String {
        if self.devices.is_empty() {
            return "No paired devices (set TILL_PAIRED_DEVICES)".to_string();
        }
        self.devices
            .iter()
            .enumerate()
            .map(|(n, d)| format!("  {}) {}", n + 1, d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
