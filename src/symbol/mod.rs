mod entry;
mod table;

pub use entry::{SymbolEntry, SymbolId, SymbolKind};
pub use table::SymbolTable;

/// Stored identifiers are cut to this many characters.
pub const MAX_LEXEME_LEN: usize = 35;

/// Distinct occurrence lines kept per entry.
pub const MAX_OCCURRENCES: usize = 5;

/// Canonical form of an identifier: uppercased, then truncated.
///
/// Folding is one character to one character, so the folded form never
/// grows. Characters whose uppercase spans several characters (`ß`) are
/// kept as written.
pub fn normalize(raw: &str) -> String {
    raw.chars().take(MAX_LEXEME_LEN).map(fold_char).collect()
}

fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
