//! Currency formatting

use rust_decimal::{Decimal, RoundingStrategy};

/// Whole-unit amount with a currency symbol: `₹600`
pub fn format_amount(symbol: &str, amount: i64) -> String {
    format!("{}{}", symbol, amount)
}

/// Fractional amount rounded half-up to two places: `₹24.36`
pub fn format_decimal(symbol: &str, amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", symbol, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("₹", 1160), "₹1160");
        assert_eq!(format_amount("Rs.", 0), "Rs.0");
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal("₹", Decimal::new(26, 0)), "₹26.00");
        assert_eq!(format_decimal("₹", Decimal::new(24355, 3)), "₹24.36");
    }
}
