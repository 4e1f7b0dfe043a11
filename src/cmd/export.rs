//! Export command - write the summary document

use super::DeclarationArgs;
use crate::core::calculate_zakat;
use crate::report::{self, ReportData};
use anyhow::Context;
use clap::Args;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ExportCommand {
    #[command(flatten)]
    declaration: DeclarationArgs,

    /// Output file path, or "-" for stdout (default: new temp file opened in the viewer)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl ExportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let declaration = self.declaration.load()?;
        let summary = calculate_zakat(&declaration);
        let data = ReportData::new(&summary, chrono::Local::now().date_naive());

        match &self.output {
            Some(path) if path.as_os_str() == "-" => {
                report::write_html(&data, io::stdout().lock())?;
            }
            Some(path) => {
                report::export_html(&data, path)?;
                println!("Zakat summary written to: {}", path.display());
            }
            None => {
                let path = fresh_summary_path()?;
                report::export_html(&data, &path)?;
                opener::open(&path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                println!("Opened zakat summary: {}", path.display());
            }
        }

        Ok(())
    }
}

/// Create a new, uniquely named file in the temp dir for one export
fn fresh_summary_path() -> anyhow::Result<PathBuf> {
    let (file, path) = tempfile::Builder::new()
        .prefix("zakat-summary-")
        .suffix(".html")
        .tempfile()
        .context("failed to create temp file for summary")?
        .keep()
        .context("failed to persist temp file for summary")?;
    drop(file);
    Ok(path)
}
