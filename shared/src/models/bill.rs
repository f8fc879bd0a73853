//! Bill Model
//!
//! Totals are always derived from the lines, never stored alongside them,
//! so `line_total == quantity * unit_price` and
//! `total == sum(line_total)` hold by construction.

use serde::{Deserialize, Serialize};

/// One line on a bill
///
/// Lines have no identity beyond structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillItem {
    pub name: String,
    /// Always >= 1
    pub quantity: u32,
    pub unit_price: i64,
}

impl BillItem {
    pub fn new(name: impl Into<String>, quantity: u32, unit_price: i64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> i64 {
        self.unit_price * i64::from(self.quantity)
    }

    /// Line total, or `None` if it does not fit in an `i64`
    pub fn checked_line_total(&self) -> Option<i64> {
        self.unit_price.checked_mul(i64::from(self.quantity))
    }
}

/// The bill being rung up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub token_number: u32,
    pub items: Vec<BillItem>,
}

impl Bill {
    pub fn new(token_number: u32) -> Self {
        Self {
            token_number,
            items: Vec::new(),
        }
    }

    pub fn total(&self) -> i64 {
        self.items.iter().map(BillItem::line_total).sum()
    }

    /// Grand total, or `None` if any line or the sum overflows
    pub fn checked_total(&self) -> Option<i64> {
        self.items
            .iter()
            .try_fold(0i64, |acc, item| acc.checked_add(item.checked_line_total()?))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Immutable record of a finalized bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBill {
    pub token_number: u32,
    pub items: Vec<BillItem>,
    pub total_amount: i64,
}

impl From<&Bill> for SavedBill {
    fn from(bill: &Bill) -> Self {
        Self {
            token_number: bill.token_number,
            items: bill.items.clone(),
            total_amount: bill.total(),
        }
    }
}
