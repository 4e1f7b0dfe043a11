use super::{ExportError, ReportData, DOCUMENT_TITLE};
use crate::money::format_amount;
use std::io::Write;

const TEMPLATE: &str = include_str!("summary.html");
const CSS: &str = include_str!("summary.css");

/// Render the summary document into `writer`
pub fn write_html<W: Write>(data: &ReportData, mut writer: W) -> Result<(), ExportError> {
    let html = render(data);
    writer.write_all(html.as_bytes())?;
    Ok(())
}

fn render(data: &ReportData) -> String {
    let lines = data.lines();
    let last = lines.len() - 1;
    let rows = lines
        .iter()
        .enumerate()
        .map(|(i, (label, amount))| {
            let class = if i == last { " class=\"payable\"" } else { "" };
            format!(
                "            <tr{class}><td>{label}</td><td class=\"amount\">{}</td></tr>",
                format_amount(*amount)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    TEMPLATE
        .replace("__CSS__", CSS)
        .replace("__TITLE__", DOCUMENT_TITLE)
        .replace("__ROWS__", &rows)
        .replace("__DISCLAIMER__", data.disclaimer())
        .replace("__GENERATED__", &data.generated.format("%Y-%m-%d").to_string())
}
