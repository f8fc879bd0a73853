//! On-screen views
//!
//! Pure functions from state to text. Nothing here touches the printer.

use chrono::{DateTime, TimeZone};
use shared::money::{format_amount, format_decimal};
use shared::{Bill, Catalog, InvoiceAdjustment, SavedBill, StoreInfo};
use std::fmt::Display;

/// Seller copy and customer invoice for a bill
pub struct InvoiceView<'a> {
    store: &'a StoreInfo,
    adjustments: &'a [InvoiceAdjustment],
    currency: &'a str,
}

impl<'a> InvoiceView<'a> {
    pub fn new(store: &'a StoreInfo, adjustments: &'a [InvoiceAdjustment], currency: &'a str) -> Self {
        Self {
            store,
            adjustments,
            currency,
        }
    }

    /// Render both copies, dated `at`
    pub fn render<Tz>(&self, bill: &Bill, at: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut out = String::new();
        self.render_seller_bill(&mut out, bill);
        out.push('\n');
        self.render_invoice(&mut out, bill, at);
        out
    }

    fn render_seller_bill(&self, out: &mut String, bill: &Bill) {
        push_line(out, "Seller Bill");
        push_line(out, &format!("Token Number: {}", bill.token_number));
        out.push('\n');
        push_line(out, "| Item        | Qty |");
        for item in &bill.items {
            push_line(out, &format!("| {} | {} |", item.name, item.quantity));
        }
    }

    fn render_invoice<Tz>(&self, out: &mut String, bill: &Bill, at: &DateTime<Tz>)
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let total = format_amount(self.currency, bill.total());

        push_line(out, &self.store.name);
        for line in &self.store.address {
            push_line(out, line);
        }
        push_line(out, &format!("PHONE : {}", self.store.phone));
        push_line(out, &format!("GSTIN : {}", self.store.tax_id));
        out.push('\n');

        push_line(out, "Retail Invoice");
        push_line(out, &format!("Date : {}", at.format("%d/%m/%Y, %I:%M %p")));
        push_line(out, &format!("Bill No: SR{}", bill.token_number));
        push_line(out, "Payment Mode: Cash");
        push_line(out, &format!("Token Number: {}", bill.token_number));
        out.push('\n');

        push_line(out, "| Item        | Qty | Amt   |");
        for item in &bill.items {
            push_line(
                out,
                &format!(
                    "| {} | {} | {} |",
                    item.name,
                    item.quantity,
                    format_amount(self.currency, item.line_total())
                ),
            );
        }
        push_line(out, &format!("Sub Total    | {} | {} |", bill.items.len(), total));
        for adj in self.adjustments {
            push_line(
                out,
                &format!("{} |     | {} |", adj.label, format_decimal(self.currency, adj.amount)),
            );
        }
        out.push('\n');

        push_line(out, &format!("**TOTAL** |     | {} |", total));
        out.push('\n');
        push_line(out, &format!("Cash : {}", total));
        push_line(out, &format!("Cash tendered: {}", total));
        push_line(out, "E & O.E");
    }
}

/// Current bill: token, selected lines, grand total
pub fn bill_view(bill: &Bill, currency: &str) -> String {
    let mut out = String::new();
    push_line(&mut out, &format!("Token Number: {}", bill.token_number));
    push_line(&mut out, "Selected Items");
    if bill.is_empty() {
        push_line(&mut out, "  (none)");
    }
    for (n, item) in bill.items.iter().enumerate() {
        push_line(
            &mut out,
            &format!(
                "  {}. {}, Qty: {}, Total: {}",
                n + 1,
                item.name,
                item.quantity,
                format_amount(currency, item.line_total())
            ),
        );
    }
    push_line(&mut out, &format!("Total: {}", format_amount(currency, bill.total())));
    out
}

/// Numbered item picker
pub fn catalog_view(catalog: &Catalog, currency: &str) -> String {
    let mut out = String::new();
    push_line(&mut out, "Select Items");
    for (n, item) in catalog.items().iter().enumerate() {
        push_line(&mut out, &format!("  {}) {}", n + 1, item.label(currency)));
    }
    out
}

/// Finalized bills of this session
pub fn saved_view(saved: &[SavedBill], currency: &str) -> String {
    let mut out = String::new();
    if saved.is_empty() {
        push_line(&mut out, "No saved bills");
    }
    for bill in saved {
        push_line(
            &mut out,
            &format!(
                "Token {}: {} line(s), {}",
                bill.token_number,
                bill.items.len(),
                format_amount(currency, bill.total_amount)
            ),
        );
    }
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::BillItem;

    fn bill() -> Bill {
        let mut bill = Bill::new(3);
        bill.items.push(BillItem::new("Alternagel", 3, 200));
        bill.items.push(BillItem::new("Bepanthen", 1, 560));
        bill
    }

    #[test]
    fn test_invoice_sections() {
        let store = StoreInfo::default();
        let adjustments = InvoiceAdjustment::standard();
        let at = Utc.with_ymd_and_hms(2024, 1, 22, 14, 32, 15).unwrap();

        let text = InvoiceView::new(&store, &adjustments, "₹").render(&bill(), &at);

        assert!(text.starts_with("Seller Bill\nToken Number: 3\n"));
        assert!(text.contains("| Alternagel | 3 |\n"));
        assert!(text.contains("Date : 22/01/2024, 02:32 PM\n"));
        assert!(text.contains("Bill No: SR3\n"));
        assert!(text.contains("| Alternagel | 3 | ₹600 |\n"));
        assert!(text.contains("Sub Total    | 2 | ₹1160 |\n"));
        assert!(text.contains("(-) Discount |     | ₹26.00 |\n"));
        assert!(text.contains("CGST @ 14.00% |     | ₹24.36 |\n"));
        assert!(text.contains("**TOTAL** |     | ₹1160 |\n"));
        assert!(text.ends_with("Cash tendered: ₹1160\nE & O.E\n"));
    }

    #[test]
    fn test_bill_view() {
        let text = bill_view(&bill(), "₹");
        assert!(text.contains("  1. Alternagel, Qty: 3, Total: ₹600\n"));
        assert!(text.contains("  2. Bepanthen, Qty: 1, Total: ₹560\n"));
        assert!(text.ends_with("Total: ₹1160\n"));

        let empty = bill_view(&Bill::new(1), "₹");
        assert!(empty.contains("(none)"));
        assert!(empty.ends_with("Total: ₹0\n"));
    }

    #[test]
    fn test_catalog_view() {
        let text = catalog_view(&Catalog::default(), "₹");
        assert!(text.contains("  1) Alternagel - ₹200\n"));
        assert!(text.contains("  3) Item 3 - ₹300\n"));
    }

    #[test]
    fn test_saved_view() {
        let saved = vec![SavedBill::from(&bill())];
        assert_eq!(saved_view(&saved, "₹"), "Token 3: 2 line(s), ₹1160\n");
        assert_eq!(saved_view(&[], "₹"), "No saved bills\n");
    }
}
