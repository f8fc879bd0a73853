//! Store Info Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Merchant details printed at the top of every receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub name: String,
    /// One entry per printed line
    pub address: Vec<String>,
    pub phone: String,
    /// GST identification number
    pub tax_id: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        Self {
            name: "RAGA PVT LTD".to_string(),
            address: vec![
                "S USMAN ROAD, T. NAGAR,".to_string(),
                "CHENNAI, TAMIL NADU.".to_string(),
            ],
            phone: "044 258636222".to_string(),
            tax_id: "33AAAGP0685F1ZH".to_string(),
        }
    }
}

/// Fixed tax/discount line shown on the invoice
///
/// Display only; adjustments never change the bill total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceAdjustment {
    pub label: String,
    pub amount: Decimal,
}

impl InvoiceAdjustment {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }

    /// Discount and GST lines of the standard invoice
    pub fn standard() -> Vec<Self> {
        vec![
            Self::new("(-) Discount", Decimal::new(2600, 2)),
            Self::new("CGST @ 14.00%", Decimal::new(2436, 2)),
            Self::new("SGST @ 14.00%", Decimal::new(2235, 2)),
            Self::new("CGST @ 2.50%", Decimal::new(1400, 2)),
            Self::new("SGST @ 2.50%", Decimal::new(1400, 2)),
        ]
    }
}
