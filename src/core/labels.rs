//! Static bilingual (English | Urdu) labels used in displayed output.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Label {
    pub en: &'static str,
    pub ur: &'static str,
}

impl Label {
    pub const fn new(en: &'static str, ur: &'static str) -> Self {
        Label { en, ur }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ur.is_empty() {
            write!(f, "{}", self.en)
        } else {
            write!(f, "{} | {}", self.en, self.ur)
        }
    }
}

pub const TITLE: Label = Label::new("Zakat Calculator", "زکوٰۃ کیلکولیٹر");
pub const SUMMARY: Label = Label::new("Summary", "خلاصہ");
pub const TOTAL_ASSETS: Label = Label::new("Total Assets", "کل اثاثے");
pub const TOTAL_LIABILITIES: Label = Label::new("Total Liabilities", "کل قرض اور اخراجات");
pub const NET_AMOUNT: Label = Label::new("Net Amount (Assets - Liabilities)", "خالص رقم (اثاثے - قرض)");
pub const ZAKAT_PAYABLE: Label = Label::new("Zakat Payable Amount", "");

/// Currency suffix shown after the payable amount
pub const CURRENCY: &str = "روپے";

pub const ESTIMATE_NOTE: &str =
    "Note: This calculator provides an estimate. Consult an Islamic scholar for specific situations.";
pub const BELOW_NISAB_NOTE: &str = "No Zakat is required as net wealth is below the Nisab.";
