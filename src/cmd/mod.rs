pub mod export;
pub mod schema;
pub mod summary;

use crate::core::{
    read_declaration_csv, read_declaration_json, DeclarationInput, WealthDeclaration,
};
use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Declared amounts: an optional file, then per-field overrides
#[derive(Args, Debug, Default)]
pub struct DeclarationArgs {
    /// JSON or CSV file with declared amounts (or "-" for JSON on stdin)
    #[arg(short, long)]
    declaration: Option<PathBuf>,

    /// Cash at hand
    #[arg(long)]
    cash: Option<Decimal>,
    /// Money in bank accounts
    #[arg(long)]
    bank: Option<Decimal>,
    /// Other cash, e.g. mobile wallets
    #[arg(long)]
    other_cash: Option<Decimal>,
    /// Value of gold
    #[arg(long)]
    gold: Option<Decimal>,
    /// Shares and stock market investments
    #[arg(long)]
    shares: Option<Decimal>,
    /// Property held for sale
    #[arg(long)]
    property: Option<Decimal>,
    /// Business inventory value
    #[arg(long)]
    inventory: Option<Decimal>,
    /// Receivable amounts
    #[arg(long)]
    receivables: Option<Decimal>,
    /// Cash held in the business
    #[arg(long)]
    business_cash: Option<Decimal>,
    /// Outstanding loans
    #[arg(long)]
    loans: Option<Decimal>,
    /// Pending household expenses
    #[arg(long)]
    expenses: Option<Decimal>,
    /// Other liabilities
    #[arg(long)]
    other_liabilities: Option<Decimal>,
}

impl DeclarationArgs {
    /// Build the validated declaration from the file (if any) and flag overrides
    pub fn load(&self) -> anyhow::Result<WealthDeclaration> {
        let mut input = match &self.declaration {
            Some(path) => read_declaration(path)?,
            None => DeclarationInput::default(),
        };
        self.apply_overrides(&mut input);

        let declaration = WealthDeclaration::try_from(input)?;
        Ok(declaration)
    }

    fn apply_overrides(&self, input: &mut DeclarationInput) {
        let overrides = [
            (self.cash, &mut input.cash_at_hand),
            (self.bank, &mut input.bank_balance),
            (self.other_cash, &mut input.other_cash),
            (self.gold, &mut input.gold),
            (self.shares, &mut input.shares),
            (self.property, &mut input.property),
            (self.inventory, &mut input.inventory),
            (self.receivables, &mut input.receivables),
            (self.business_cash, &mut input.business_cash),
            (self.loans, &mut input.outstanding_loans),
            (self.expenses, &mut input.pending_expenses),
            (self.other_liabilities, &mut input.other_liabilities),
        ];
        for (value, target) in overrides {
            if let Some(value) = value {
                *target = value;
            }
        }
    }
}

/// Read declared amounts from a file (CSV by extension, otherwise JSON) or stdin with "-"
pub fn read_declaration(path: &Path) -> anyhow::Result<DeclarationInput> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<DeclarationInput> {
    let file = File::open(path)
        .with_context(|| format!("failed to open declaration {}", path.display()))?;
    let reader = BufReader::new(file);
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let input = if is_csv {
        read_declaration_csv(reader)?
    } else {
        read_declaration_json(reader)?
    };
    log::debug!("Read declaration from {}", path.display());
    Ok(input)
}

fn read_from_stdin() -> anyhow::Result<DeclarationInput> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    let cursor = io::Cursor::new(buffer);
    Ok(read_declaration_json(cursor)?)
}
