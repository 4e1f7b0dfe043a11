//! Schema command - print the expected declaration format

use crate::core::{Category, DeclarationInput};
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema, csv-header or fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the declaration
    JsonSchema,
    /// CSV header row with column names
    CsvHeader,
    /// Field descriptions grouped by category
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::CsvHeader => self.print_csv_header(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(DeclarationInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_csv_header(&self) -> anyhow::Result<()> {
        let keys: Vec<_> = DeclarationInput::declaration_schema()
            .iter()
            .map(|f| f.key)
            .collect();
        println!("{}", keys.join(","));
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        println!("Declaration Fields");
        println!("==================");
        for category in Category::ALL {
            println!();
            println!("{}", category.heading());
            for field in DeclarationInput::declaration_schema()
                .iter()
                .filter(|f| f.category == category)
            {
                println!("  {:20} {}", field.key, field.display_label());
                println!("  {:20} {}", "", field.hint);
            }
        }
        println!();
        println!("All amounts are whole, non-negative currency units; missing fields are 0.");
        Ok(())
    }
}
