mod scanner;

pub use scanner::Scanner;

use crate::{symbol::SymbolTable, token::Token};

/// Scans `text` to completion. The last token is always `Eof`.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn scan(text: &str, table: &mut SymbolTable) -> Vec<Token> {
    let tokens = Scanner::new(text, table).collect::<Vec<_>>();
    tracing::debug!(tokens = tokens.len(), symbols = table.len(), "scan complete");
    tokens
}
