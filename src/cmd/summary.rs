//! Summary command - category subtotals, net amount and zakat payable

use super::DeclarationArgs;
use crate::core::labels::{self, Label};
use crate::core::{calculate_zakat, Category, DeclarationInput, WealthDeclaration, ZakatSummary};
use crate::money::{format_amount, format_currency};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct SummaryCommand {
    #[command(flatten)]
    declaration: DeclarationArgs,

    /// Output as JSON instead of formatted text
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output as CSV rows of label and amount
    #[arg(long)]
    csv: bool,
}

/// Summary data for JSON output
#[derive(Debug, Serialize)]
struct SummaryData {
    declaration: DeclarationInput,
    cash_subtotal: String,
    investment_subtotal: String,
    business_subtotal: String,
    liability_subtotal: String,
    total_assets: String,
    net_amount: String,
    zakat_payable: String,
    zakat_payable_display: String,
    payable: bool,
    advisory: String,
}

/// Row for the subtotal table and CSV output
#[derive(Debug, Clone, Tabled, Serialize)]
struct SummaryRow {
    #[tabled(rename = "Item")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl SummaryCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let declaration = self.declaration.load()?;
        let summary = calculate_zakat(&declaration);

        if self.json {
            print_json(&declaration, &summary)
        } else if self.csv {
            write_csv(&summary)
        } else {
            print_summary(&declaration, &summary);
            Ok(())
        }
    }
}

fn print_summary(declaration: &WealthDeclaration, summary: &ZakatSummary) {
    println!();
    println!("{}", labels::TITLE);

    for category in Category::ALL {
        println!();
        println!("{}", category.heading());
        for (field, value) in declaration.category_entries(category) {
            println!("  {}: {}", field.display_label(), format_amount(value));
        }
        println!(
            "  {} {}",
            category.subtotal_label(),
            format_amount(summary.subtotal(category))
        );
    }

    println!();
    println!("{}", labels::SUMMARY);
    let table = Table::new(summary_rows(summary))
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
    println!();
    println!(
        "{}: {}",
        labels::ZAKAT_PAYABLE,
        format_currency(summary.zakat_payable)
    );

    let advisory = summary.advisory();
    let marker = if advisory.is_warning() { "\u{26A0}" } else { "\u{2139}" };
    println!("{} {}", marker, advisory.message());
    println!();
}

fn summary_rows(summary: &ZakatSummary) -> Vec<SummaryRow> {
    let mut rows: Vec<SummaryRow> = Category::ALL
        .iter()
        .map(|&category| row(category.subtotal_label(), summary.subtotal(category)))
        .collect();
    rows.push(row(labels::TOTAL_ASSETS, summary.total_assets));
    rows.push(row(labels::TOTAL_LIABILITIES, summary.liability_subtotal));
    rows.push(row(labels::NET_AMOUNT, summary.net_amount));
    rows.push(row(labels::ZAKAT_PAYABLE, summary.zakat_payable));
    rows
}

fn row(label: Label, amount: Decimal) -> SummaryRow {
    SummaryRow {
        label: label.to_string(),
        amount: format_amount(amount),
    }
}

fn print_json(declaration: &WealthDeclaration, summary: &ZakatSummary) -> anyhow::Result<()> {
    let data = SummaryData {
        declaration: declaration.amounts().clone(),
        cash_subtotal: summary.cash_subtotal.to_string(),
        investment_subtotal: summary.investment_subtotal.to_string(),
        business_subtotal: summary.business_subtotal.to_string(),
        liability_subtotal: summary.liability_subtotal.to_string(),
        total_assets: summary.total_assets.to_string(),
        net_amount: summary.net_amount.to_string(),
        zakat_payable: summary.zakat_payable.to_string(),
        zakat_payable_display: format_amount(summary.zakat_payable),
        payable: summary.is_payable(),
        advisory: summary.advisory().message().to_string(),
    };

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

fn write_csv(summary: &ZakatSummary) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    for row in summary_rows(summary) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rows_cover_subtotals_and_summary_block() {
        let summary = ZakatSummary {
            cash_subtotal: dec!(150000),
            investment_subtotal: dec!(0),
            business_subtotal: dec!(0),
            liability_subtotal: dec!(0),
            total_assets: dec!(150000),
            net_amount: dec!(150000),
            zakat_payable: dec!(3750.000),
        };
        let rows = summary_rows(&summary);

        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].label, "Total Cash & Bank Balance | کل نقدی");
        assert_eq!(rows[0].amount, "150,000");
        assert_eq!(rows[7].label, "Zakat Payable Amount");
        assert_eq!(rows[7].amount, "3,750");
    }
}
