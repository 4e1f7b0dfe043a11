//! Export of a computed summary as a single-page document.
//!
//! The document is a static HTML page with print styling and no scripts.
//! Callers choose where it goes: any `Write` sink, or a path they supply.

mod html;

pub use html::write_html;

use crate::core::labels;
use crate::core::ZakatSummary;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DOCUMENT_TITLE: &str = "Zakat Calculation Summary";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write summary to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write summary: {0}")]
    Io(#[from] std::io::Error),
}

/// The four figures carried into the exported document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportData {
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_amount: Decimal,
    pub zakat_payable: Decimal,
    pub generated: NaiveDate,
}

impl ReportData {
    pub fn new(summary: &ZakatSummary, generated: NaiveDate) -> Self {
        ReportData {
            total_assets: summary.total_assets,
            total_liabilities: summary.liability_subtotal,
            net_amount: summary.net_amount,
            zakat_payable: summary.zakat_payable,
            generated,
        }
    }

    /// Labeled figures in document order
    pub fn lines(&self) -> [(&'static str, Decimal); 4] {
        [
            (labels::TOTAL_ASSETS.en, self.total_assets),
            (labels::TOTAL_LIABILITIES.en, self.total_liabilities),
            ("Net Amount", self.net_amount),
            ("Zakat Payable", self.zakat_payable),
        ]
    }

    pub fn disclaimer(&self) -> &'static str {
        if self.zakat_payable > Decimal::ZERO {
            labels::ESTIMATE_NOTE
        } else {
            labels::BELOW_NISAB_NOTE
        }
    }
}

/// Write the document to `path`, creating or truncating the file.
pub fn export_html(data: &ReportData, path: &Path) -> Result<(), ExportError> {
    let write_err = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    write_html(data, &mut writer).map_err(|e| match e {
        ExportError::Io(source) => write_err(source),
        other => other,
    })?;
    writer.flush().map_err(write_err)?;

    log::info!("Exported summary to {}", path.display());
    Ok(())
}
