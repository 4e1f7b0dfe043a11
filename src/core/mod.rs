pub mod declaration;
pub mod labels;
pub mod zakat;

// Flat public surface for domain types and functions.
pub use declaration::{
    read_declaration_csv, read_declaration_json, Category, DeclarationInput, WealthDeclaration,
};
pub use zakat::{calculate_zakat, ZakatSummary};
