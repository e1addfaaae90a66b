use minivec::MiniVec;
use strum::IntoStaticStr;

use crate::{symbol::MAX_OCCURRENCES, token::TokenKind};

/// What an identifier names. Only `Unknown` is assigned today; later phases
/// refine it through `SymbolTable::set_kind`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SymbolKind {
    #[default]
    Unknown,
    Variable,
    Function,
    Parameter,
}

impl SymbolKind {
    pub fn code(self) -> &'static str {
        self.into()
    }
}

/// Handle to a table entry. Wraps the 1-based index, which never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(pub(crate) usize);

impl SymbolId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct SymbolEntry {
    index: usize,
    atom: TokenKind,
    lexeme: String,
    len_before_truncation: usize,
    len_after_truncation: usize,
    kind: SymbolKind,
    lines: MiniVec<u32>,
}

impl SymbolEntry {
    pub(crate) fn new(index: usize, atom: TokenKind, lexeme: String, raw_len: usize, line: u32) -> Self {
        let len_after_truncation = lexeme.chars().count();
        let mut lines = MiniVec::with_capacity(MAX_OCCURRENCES);
        lines.push(line);
        Self {
            index,
            atom,
            lexeme,
            len_before_truncation: raw_len,
            len_after_truncation,
            kind: SymbolKind::Unknown,
            lines,
        }
    }

    /// Records another sighting. The line list is capped and deduplicated;
    /// the pre-truncation length only ever grows.
    pub(crate) fn record_occurrence(&mut self, raw_len: usize, line: u32) {
        if raw_len > self.len_before_truncation {
            self.len_before_truncation = raw_len;
        }
        if self.lines.len() < MAX_OCCURRENCES && !self.lines.as_slice().contains(&line) {
            self.lines.push(line);
        }
    }

    pub(crate) fn set_kind(&mut self, kind: SymbolKind) {
        self.kind = kind;
    }

    pub fn id(&self) -> SymbolId {
        SymbolId(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn atom(&self) -> TokenKind {
        self.atom
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn len_before_truncation(&self) -> usize {
        self.len_before_truncation
    }

    pub fn len_after_truncation(&self) -> usize {
        self.len_after_truncation
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn lines(&self) -> &[u32] {
        self.lines.as_slice()
    }
}
