use crate::core::labels::CURRENCY;
use rust_decimal::Decimal;

/// Display an amount as whole units with thousands separators.
///
/// Fractional digits are truncated toward zero, so `-1,999.9` displays as
/// `-1,999` and `-0.4` as `0`.
pub fn format_amount(amount: Decimal) -> String {
    let whole = amount.trunc();
    let digits = whole.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole.is_sign_negative() && !whole.is_zero() {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Display an amount followed by the currency suffix
pub fn format_currency(amount: Decimal) -> String {
    format!("{} {}", format_amount(amount), CURRENCY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_amount(dec!(0)), "0");
        assert_eq!(format_amount(dec!(7)), "7");
        assert_eq!(format_amount(dec!(999)), "999");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_amount(dec!(1000)), "1,000");
        assert_eq!(format_amount(dec!(3750)), "3,750");
        assert_eq!(format_amount(dec!(150000)), "150,000");
        assert_eq!(format_amount(dec!(1500000)), "1,500,000");
        assert_eq!(format_amount(dec!(1234567890)), "1,234,567,890");
    }

    #[test]
    fn fractions_truncate_not_round() {
        assert_eq!(format_amount(dec!(3750.000)), "3,750");
        assert_eq!(format_amount(dec!(16.275)), "16");
        assert_eq!(format_amount(dec!(999.99)), "999");
    }

    #[test]
    fn negatives_truncate_toward_zero() {
        assert_eq!(format_amount(dec!(-50000)), "-50,000");
        assert_eq!(format_amount(dec!(-1999.9)), "-1,999");
        assert_eq!(format_amount(dec!(-0.4)), "0");
    }

    #[test]
    fn formatting_is_deterministic() {
        let amount = dec!(123456.78);
        assert_eq!(format_amount(amount), format_amount(amount));
    }

    #[test]
    fn currency_suffix() {
        assert_eq!(format_currency(dec!(3750)), "3,750 روپے");
    }
}
