//! Receipt renderer
//!
//! Renders a bill into the fixed ESC/POS receipt layout:
//!
//! ```text
//! ESC @
//! <store name / address / PHONE / GSTIN>
//!
//! Retail Invoice
//! Token Number: <n>
//!
//! Item        | Qty | Amt
//! ------------------------
//! <name> | <qty> | <amount>
//!
//! Total: <amount>
//! <3 blank lines>
//! GS V A 0x10
//! ```

use shared::money::format_amount;
use shared::{Bill, StoreInfo};
use till_printer::{EscPosBuilder, ascii_width, pad_ascii, truncate_ascii};

/// Lines fed before the cut so the receipt clears the tear bar
const TEAR_OFF_LINES: usize = 3;
/// Feed argument sent with the cut command
const CUT_FEED: u8 = 0x10;
/// Dash rule under the column header
const RULE_WIDTH: usize = 24;

/// Receipt renderer
pub struct ReceiptRenderer<'a> {
    store: &'a StoreInfo,
    currency: &'a str,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(store: &'a StoreInfo, currency: &'a str, width: usize) -> Self {
        Self {
            store,
            currency,
            width,
        }
    }

    /// Render a bill to ESC/POS bytes
    pub fn render(&self, bill: &Bill) -> Vec<u8> {
        let mut b = EscPosBuilder::new(self.width);

        self.render_header(&mut b, bill);
        self.render_items(&mut b, bill);
        self.render_footer(&mut b, bill);

        b.build()
    }

    fn render_header(&self, b: &mut EscPosBuilder, bill: &Bill) {
        b.line(&self.store.name);
        for line in &self.store.address {
            b.line(line);
        }
        b.line(&format!("PHONE : {}", self.store.phone));
        b.line(&format!("GSTIN : {}", self.store.tax_id));
        b.newline();

        b.line("Retail Invoice");
        b.line(&format!("Token Number: {}", bill.token_number));
        b.newline();
    }

    fn render_items(&self, b: &mut EscPosBuilder, bill: &Bill) {
        let header = format!("{}| Qty | Amt", pad_ascii("Item", 12, false));
        b.line(&header);
        b.rule('-', RULE_WIDTH);

        for item in &bill.items {
            let suffix = format!(
                " | {} | {}",
                item.quantity,
                format_amount(self.currency, item.line_total())
            );
            // Long names are cut so the amount stays on the same line
            let room = b.width().saturating_sub(ascii_width(&suffix));
            let name = truncate_ascii(&item.name, room);
            b.line(&format!("{}{}", name, suffix));
        }
        b.newline();
    }

    fn render_footer(&self, b: &mut EscPosBuilder, bill: &Bill) {
        b.line(&format!("Total: {}", format_amount(self.currency, bill.total())));
        b.blank_lines(TEAR_OFF_LINES);
        b.cut_feed(CUT_FEED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::BillItem;

    fn bill() -> Bill {
        let mut bill = Bill::new(3);
        bill.items.push(BillItem::new("Alternagel", 3, 200));
        bill.items.push(BillItem::new("Bepanthen", 1, 560));
        bill
    }

    #[test]
    fn test_exact_layout() {
        let store = StoreInfo::default();
        let data = ReceiptRenderer::new(&store, "Rs.", 32).render(&bill());

        let mut expected = vec![0x1B, 0x40];
        expected.extend_from_slice(
            b"RAGA PVT LTD\n\
              S USMAN ROAD, T. NAGAR,\n\
              CHENNAI, TAMIL NADU.\n\
              PHONE : 044 258636222\n\
              GSTIN : 33AAAGP0685F1ZH\n\
              \n\
              Retail Invoice\n\
              Token Number: 3\n\
              \n\
              Item        | Qty | Amt\n\
              ------------------------\n\
              Alternagel | 3 | Rs.600\n\
              Bepanthen | 1 | Rs.560\n\
              \n\
              Total: Rs.1160\n\
              \n\n\n",
        );
        expected.extend_from_slice(&[0x1D, 0x56, 0x41, 0x10]);

        assert_eq!(data, expected);
    }

    #[test]
    fn test_output_is_ascii() {
        let store = StoreInfo::default();
        let data = ReceiptRenderer::new(&store, "₹", 32).render(&bill());
        assert!(data.iter().all(u8::is_ascii));
        assert!(String::from_utf8_lossy(&data).contains("Total: Rs.1160"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let store = StoreInfo::default();
        let mut bill = Bill::new(1);
        bill.items
            .push(BillItem::new("An extraordinarily long product name", 2, 150));

        let data = ReceiptRenderer::new(&store, "Rs.", 32).render(&bill);
        let text = String::from_utf8_lossy(&data);
        let line = text
            .lines()
            .find(|l| l.ends_with("| 2 | Rs.300"))
            .unwrap();
        assert_eq!(line.len(), 32);
        assert!(line.starts_with("An extraordinarily"));
    }

    #[test]
    fn test_item_names_cannot_inject_commands() {
        let store = StoreInfo::default();
        let mut bill = Bill::new(1);
        bill.items.push(BillItem::new("Soap\x1D\x56\x41\x10\nFake", 1, 45));

        let data = ReceiptRenderer::new(&store, "Rs.", 32).render(&bill);
        let body = &data[..data.len() - 4];
        assert!(!body.contains(&0x1D));
        assert!(String::from_utf8_lossy(&data).contains("Soap?VA??Fake | 1 | Rs.45\n"));
    }

    #[test]
    fn test_empty_bill() {
        let store = StoreInfo::default();
        let data = ReceiptRenderer::new(&store, "Rs.", 32).render(&Bill::new(1));
        let text = String::from_utf8_lossy(&data);
        assert!(text.contains("Total: Rs.0"));
        assert!(data.ends_with(&[0x1D, 0x56, 0x41, 0x10]));
    }
}
