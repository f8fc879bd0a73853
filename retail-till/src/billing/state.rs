//! Bill state reducer
//!
//! `BillState` is an immutable value; every operator action goes through
//! [`BillState::apply`], which returns the next state. Invalid input
//! (bad quantity, unknown line, decrement below 1, a total too large to
//! represent) yields the state unchanged, with no error surfaced.

use shared::{Bill, BillItem, Catalog, SavedBill};
use std::sync::Arc;
use tracing::{debug, warn};

/// Operator actions on the bill
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BillAction {
    /// Add a catalog item; `quantity` is the raw text typed by the operator
    AddItem { catalog_index: usize, quantity: String },
    /// Set the quantity of the first line equal to `item`
    UpdateQuantity { item: BillItem, quantity: u32 },
    /// Remove the first line equal to the given item
    DeleteItem(BillItem),
    /// Replace the token number with the parsed text
    EditToken(String),
    /// Snapshot the bill, bump the token, optionally start a new bill
    Finalize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillState {
    catalog: Arc<Catalog>,
    bill: Bill,
    saved: Vec<SavedBill>,
    clear_on_finalize: bool,
}

impl BillState {
    pub fn new(catalog: Arc<Catalog>, first_token: u32, clear_on_finalize: bool) -> Self {
        Self {
            catalog,
            bill: Bill::new(first_token),
            saved: Vec::new(),
            clear_on_finalize,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn bill(&self) -> &Bill {
        &self.bill
    }

    pub fn saved(&self) -> &[SavedBill] {
        &self.saved
    }

    pub fn total(&self) -> i64 {
        self.bill.total()
    }

    pub fn token_number(&self) -> u32 {
        self.bill.token_number
    }

    /// Apply an action, returning the next state
    pub fn apply(mut self, action: BillAction) -> Self {
        debug!(?action, "apply");
        match action {
            BillAction::AddItem {
                catalog_index,
                quantity,
            } => {
                let Some(quantity) = parse_quantity(&quantity) else {
                    return self;
                };
                let Some(entry) = self.catalog.get(catalog_index) else {
                    return self;
                };
                let mut bill = self.bill.clone();
                bill.items
                    .push(BillItem::new(entry.name.clone(), quantity, entry.unit_price));
                return self.commit(bill);
            }
            BillAction::UpdateQuantity { item, quantity } => {
                if quantity < 1 {
                    return self;
                }
                let mut bill = self.bill.clone();
                if let Some(line) = bill.items.iter_mut().find(|i| **i == item) {
                    line.quantity = quantity;
                }
                return self.commit(bill);
            }
            BillAction::DeleteItem(item) => {
                if let Some(pos) = self.bill.items.iter().position(|i| *i == item) {
                    self.bill.items.remove(pos);
                }
            }
            BillAction::EditToken(text) => {
                if let Ok(token) = text.trim().parse::<u32>() {
                    self.bill.token_number = token;
                }
            }
            BillAction::Finalize => {
                self.saved.push(SavedBill::from(&self.bill));
                let next_token = self.bill.token_number.wrapping_add(1);
                if self.clear_on_finalize {
                    self.bill = Bill::new(next_token);
                } else {
                    self.bill.token_number = next_token;
                }
            }
        }
        self
    }

    /// Replace the bill unless its total would overflow
    fn commit(mut self, bill: Bill) -> Self {
        if bill.checked_total().is_none() {
            warn!(token = bill.token_number, "Bill total out of range, change ignored");
            return self;
        }
        self.bill = bill;
        self
    }
}

/// Positive whole number, or nothing
fn parse_quantity(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|q| *q > 0)
}
