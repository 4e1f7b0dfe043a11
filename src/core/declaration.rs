use super::labels::Label;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;
use zakatc_derive::DeclarationSchema;

/// Largest amount accepted for a single field (`u64::MAX`, as advertised by the schema).
///
/// Twelve such amounts sum well inside `Decimal`'s range, so totals cannot overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(u32::MAX, u32::MAX, 0, false, 0);

#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: Decimal },
    #[error("{field} must be a whole amount (got {value})")]
    Fractional { field: &'static str, value: Decimal },
    #[error("{field} exceeds the largest declarable amount (got {value})")]
    TooLarge { field: &'static str, value: Decimal },
    #[error("invalid declaration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid declaration CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("declaration CSV has no data row")]
    EmptyCsv,
}

/// Grouping of declared amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Cash,
    Investments,
    Business,
    Liabilities,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Cash,
        Category::Investments,
        Category::Business,
        Category::Liabilities,
    ];

    /// Section heading shown above the category's inputs
    pub fn heading(self) -> Label {
        match self {
            Category::Cash => Label::new("Cash & Bank Balance", "نقدی اور بینک بیلنس"),
            Category::Investments => Label::new("Investments", "سرمایہ کاری"),
            Category::Business => Label::new("Business", "کاروبار"),
            Category::Liabilities => Label::new("Liabilities & Expenses", "قرض اور اخراجات"),
        }
    }

    pub fn subtotal_label(self) -> Label {
        match self {
            Category::Cash => Label::new("Total Cash & Bank Balance", "کل نقدی"),
            Category::Investments => Label::new("Total Investments", "کل سرمایہ کاری"),
            Category::Business => Label::new("Total Business Assets", "کل کاروباری اثاثے"),
            Category::Liabilities => Label::new("Total Liabilities", "کل واجب الادا رقم"),
        }
    }
}

/// One declared input, as generated from `DeclarationInput`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclarationField {
    pub key: &'static str,
    pub category: Category,
    pub label: &'static str,
    pub label_ur: &'static str,
    pub hint: &'static str,
}

impl DeclarationField {
    pub fn display_label(&self) -> Label {
        Label::new(self.label, self.label_ur)
    }
}

/// Raw declared amounts as supplied by the caller. Missing fields are zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema, DeclarationSchema)]
#[serde(default)]
pub struct DeclarationInput {
    /// Amount you have in cash
    #[field(category = "Cash", label = "Cash at hand", label_ur = "نقدی (گھر میں رکھی گئی رقم)")]
    #[schemars(with = "u64")]
    pub cash_at_hand: Decimal,
    /// Money in bank accounts
    #[field(category = "Cash", label = "Bank Balance", label_ur = "بینک میں موجود رقم")]
    #[schemars(with = "u64")]
    pub bank_balance: Decimal,
    /// Mobile wallets, digital accounts
    #[field(category = "Cash", label = "Other Cash", label_ur = "دیگر نقدی (مثلاً موبائل والٹ، دیگر اکاؤنٹس)")]
    #[schemars(with = "u64")]
    pub other_cash: Decimal,
    /// Value of gold held
    #[field(category = "Investments", label = "Gold", label_ur = "سونا (گرام کے حساب سے مالیت)")]
    #[schemars(with = "u64")]
    pub gold: Decimal,
    /// Shares and stock market investment
    #[field(category = "Investments", label = "Shares", label_ur = "شیئرز اور اسٹاک مارکیٹ انویسٹمنٹ")]
    #[schemars(with = "u64")]
    pub shares: Decimal,
    /// Property held for sale only
    #[field(category = "Investments", label = "Property", label_ur = "جائیداد (جو بیچنے کے لیے رکھی گئی ہو)")]
    #[schemars(with = "u64")]
    pub property: Decimal,
    /// Stock value of business inventory
    #[field(category = "Business", label = "Business Inventory", label_ur = "کاروباری اسٹاک یا انوینٹری")]
    #[schemars(with = "u64")]
    pub inventory: Decimal,
    /// Pending payments from customers
    #[field(category = "Business", label = "Receivable Amount", label_ur = "قابلِ وصول رقم (لوگوں سے لینی ہے)")]
    #[schemars(with = "u64")]
    pub receivables: Decimal,
    /// Money held within the business
    #[field(category = "Business", label = "Business Cash", label_ur = "کاروبار میں موجود نقد رقم")]
    #[schemars(with = "u64")]
    pub business_cash: Decimal,
    /// Loans still to be repaid
    #[field(category = "Liabilities", label = "Outstanding Loans", label_ur = "واجب الادا قرضے")]
    #[schemars(with = "u64")]
    pub outstanding_loans: Decimal,
    /// Household expenses still due
    #[field(category = "Liabilities", label = "Pending Household Expenses", label_ur = "بقایا گھریلو اخراجات")]
    #[schemars(with = "u64")]
    pub pending_expenses: Decimal,
    /// Any other amounts owed
    #[field(category = "Liabilities", label = "Other Liabilities", label_ur = "دیگر ذمہ داریاں")]
    #[schemars(with = "u64")]
    pub other_liabilities: Decimal,
}

impl DeclarationInput {
    /// Field metadata paired with its declared amount, in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&'static DeclarationField, Decimal)> {
        Self::declaration_schema()
            .iter()
            .zip(self.field_values())
    }
}

/// Validated, immutable declaration: every amount is a whole number in `0..=MAX_AMOUNT`.
///
/// Only constructed through `TryFrom<DeclarationInput>`.
#[derive(Debug, Clone, PartialEq)]
pub struct WealthDeclaration {
    input: DeclarationInput,
}

impl WealthDeclaration {
    pub fn amounts(&self) -> &DeclarationInput {
        &self.input
    }

    /// Declared amounts belonging to `category`
    pub fn category_entries(
        &self,
        category: Category,
    ) -> impl Iterator<Item = (&'static DeclarationField, Decimal)> + '_ {
        self.input
            .entries()
            .filter(move |(field, _)| field.category == category)
    }

    pub fn subtotal(&self, category: Category) -> Decimal {
        self.category_entries(category).map(|(_, value)| value).sum()
    }
}

impl TryFrom<DeclarationInput> for WealthDeclaration {
    type Error = DeclarationError;

    fn try_from(input: DeclarationInput) -> Result<Self, Self::Error> {
        for (field, value) in input.entries() {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(DeclarationError::Negative {
                    field: field.key,
                    value,
                });
            }
            if !value.fract().is_zero() {
                return Err(DeclarationError::Fractional {
                    field: field.key,
                    value,
                });
            }
            if value > MAX_AMOUNT {
                return Err(DeclarationError::TooLarge {
                    field: field.key,
                    value,
                });
            }
        }
        Ok(WealthDeclaration { input })
    }
}

/// Read a declaration from a JSON object of field amounts
pub fn read_declaration_json<R: Read>(reader: R) -> Result<DeclarationInput, DeclarationError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a declaration from CSV: a header row of field names and one data row
pub fn read_declaration_csv<R: Read>(reader: R) -> Result<DeclarationInput, DeclarationError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    match rdr.deserialize::<DeclarationInput>().next() {
        Some(record) => Ok(record?),
        None => Err(DeclarationError::EmptyCsv),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn schema_declares_twelve_fields_in_four_groups() {
        let schema = DeclarationInput::declaration_schema();
        assert_eq!(schema.len(), 12);
        for category in Category::ALL {
            let count = schema.iter().filter(|f| f.category == category).count();
            assert_eq!(count, 3, "{category:?}");
        }
    }

    #[test]
    fn schema_hints_come_from_doc_comments() {
        let schema = DeclarationInput::declaration_schema();
        assert_eq!(schema[0].key, "cash_at_hand");
        assert_eq!(schema[0].label, "Cash at hand");
        assert_eq!(schema[0].hint, "Amount you have in cash");
        assert_eq!(schema[11].key, "other_liabilities");
        assert_eq!(schema[11].category, Category::Liabilities);
    }

    #[test]
    fn field_values_follow_schema_order() {
        let input = DeclarationInput {
            bank_balance: dec!(2),
            other_liabilities: dec!(12),
            ..Default::default()
        };
        let values = input.field_values();
        assert_eq!(values[1], dec!(2));
        assert_eq!(values[11], dec!(12));
    }

    #[test]
    fn negative_amount_rejected() {
        let input = DeclarationInput {
            shares: dec!(-5),
            ..Default::default()
        };
        let err = WealthDeclaration::try_from(input).unwrap_err();
        assert!(matches!(
            err,
            DeclarationError::Negative { field: "shares", .. }
        ));
    }

    #[test]
    fn fractional_amount_rejected() {
        let input = DeclarationInput {
            cash_at_hand: dec!(10.5),
            ..Default::default()
        };
        let err = WealthDeclaration::try_from(input).unwrap_err();
        assert!(matches!(
            err,
            DeclarationError::Fractional { field: "cash_at_hand", .. }
        ));
    }

    #[test]
    fn negative_zero_and_trailing_zero_scale_accepted() {
        let input = DeclarationInput {
            gold: -Decimal::ZERO,
            property: dec!(100.00),
            ..Default::default()
        };
        assert!(WealthDeclaration::try_from(input).is_ok());
    }

    #[test]
    fn json_schema_advertises_unsigned_integers() {
        let schema = serde_json::to_value(schemars::schema_for!(DeclarationInput)).unwrap();
        let cash = &schema["properties"]["cash_at_hand"];
        assert_eq!(cash["type"], "integer");
        assert_eq!(cash["format"], "uint64");
    }

    #[test]
    fn max_amount_is_u64_max() {
        assert_eq!(MAX_AMOUNT, Decimal::from(u64::MAX));
    }

    #[test]
    fn amount_above_u64_rejected() {
        let json = r#"{"cash_at_hand": "50000000000000000000000000000", "bank_balance": "50000000000000000000000000000"}"#;
        let input = read_declaration_json(json.as_bytes()).unwrap();
        let err = WealthDeclaration::try_from(input).unwrap_err();
        assert!(matches!(
            err,
            DeclarationError::TooLarge { field: "cash_at_hand", .. }
        ));
    }

    #[test]
    fn largest_amounts_in_every_field_still_sum() {
        let max = Decimal::from(u64::MAX);
        let input = DeclarationInput {
            cash_at_hand: max,
            bank_balance: max,
            other_cash: max,
            gold: max,
            shares: max,
            property: max,
            inventory: max,
            receivables: max,
            business_cash: max,
            ..Default::default()
        };
        let declaration = WealthDeclaration::try_from(input).unwrap();
        assert_eq!(declaration.subtotal(Category::Cash), max * Decimal::from(3));
    }

    #[test]
    fn subtotal_sums_only_its_category() {
        let input = DeclarationInput {
            cash_at_hand: dec!(100),
            bank_balance: dec!(50),
            other_cash: dec!(7),
            gold: dec!(1000),
            outstanding_loans: dec!(3),
            ..Default::default()
        };
        let declaration = WealthDeclaration::try_from(input).unwrap();
        assert_eq!(declaration.subtotal(Category::Cash), dec!(157));
        assert_eq!(declaration.subtotal(Category::Investments), dec!(1000));
        assert_eq!(declaration.subtotal(Category::Business), dec!(0));
        assert_eq!(declaration.subtotal(Category::Liabilities), dec!(3));
    }

    #[test]
    fn json_missing_fields_default_to_zero() {
        let json = r#"{"cash_at_hand": 100000, "bank_balance": "50000"}"#;
        let input = read_declaration_json(json.as_bytes()).unwrap();
        assert_eq!(input.cash_at_hand, dec!(100000));
        assert_eq!(input.bank_balance, dec!(50000));
        assert_eq!(input.gold, Decimal::ZERO);
    }

    #[test]
    fn json_non_numeric_rejected() {
        let json = r#"{"cash_at_hand": "lots"}"#;
        let err = read_declaration_json(json.as_bytes()).unwrap_err();
        assert!(matches!(err, DeclarationError::Json(_)));
    }

    #[test]
    fn csv_single_row() {
        let data = "gold,shares,outstanding_loans\n1000000,500000,25\n";
        let input = read_declaration_csv(data.as_bytes()).unwrap();
        assert_eq!(input.gold, dec!(1000000));
        assert_eq!(input.shares, dec!(500000));
        assert_eq!(input.outstanding_loans, dec!(25));
        assert_eq!(input.cash_at_hand, Decimal::ZERO);
    }

    #[test]
    fn csv_without_data_row_rejected() {
        let data = "gold,shares\n";
        let err = read_declaration_csv(data.as_bytes()).unwrap_err();
        assert!(matches!(err, DeclarationError::EmptyCsv));
    }
}
