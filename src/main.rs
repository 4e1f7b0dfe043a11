use clap::{Parser, Subcommand};

mod cmd;
mod core;
mod money;
mod report;

#[derive(Parser, Debug)]
#[command(name = "zakatc", version, about = "Calculate Zakat on declared wealth")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate and display category subtotals and zakat payable
    Summary(cmd::summary::SummaryCommand),
    /// Export the zakat summary as a single-page document
    Export(cmd::export::ExportCommand),
    /// Print the declaration input format
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let opts = Opts::parse();
    match opts.command {
        Command::Summary(summary) => summary.exec(),
        Command::Export(export) => export.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
