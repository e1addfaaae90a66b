use indexmap::{IndexMap, map::Entry};
use tracing::debug;

use crate::{
    keyword::{Keyword, ReservedWords},
    symbol::{
        entry::{SymbolEntry, SymbolId, SymbolKind},
        normalize,
    },
    token::TokenKind,
};

#[derive(Debug, Default, Clone, Copy)]
enum TableState {
    #[default]
    Uninitialized,
    Active(&'static ReservedWords),
}

/// Identifier registry for one scanning session, plus reserved-word lookup.
///
/// Entries are keyed by their normalized lexeme (uppercased, cut to
/// [`MAX_LEXEME_LEN`](crate::symbol::MAX_LEXEME_LEN) characters) and kept in
/// first-seen order, so an entry's index is its position plus one.
#[derive(Debug, Default)]
pub struct SymbolTable {
    state: TableState,
    entries: IndexMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the reserved-word table. Calling it again has no effect.
    pub fn init(&mut self) {
        if let TableState::Uninitialized = self.state {
            let reserved = ReservedWords::standard();
            debug!(reserved = reserved.len(), "symbol table initialized");
            self.state = TableState::Active(reserved);
        }
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state, TableState::Active(_))
    }

    /// Reserved category of `lexeme`, ignoring case. Always `None` before `init`.
    pub fn classify(&self, lexeme: &str) -> Option<Keyword> {
        match self.state {
            TableState::Active(reserved) => reserved.classify(lexeme),
            TableState::Uninitialized => None,
        }
    }

    /// Creates or updates the entry for `raw`, seen on `line`.
    pub fn register_identifier(&mut self, raw: &str, line: u32) -> SymbolId {
        let raw_len = raw.chars().count();
        let next_index = self.entries.len() + 1;

        match self.entries.entry(normalize(raw)) {
            Entry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.record_occurrence(raw_len, line);
                entry.id()
            }
            Entry::Vacant(vacant) => {
                let lexeme = vacant.key().clone();
                debug!(index = next_index, %lexeme, line, "new symbol");
                let entry = SymbolEntry::new(next_index, TokenKind::Identifier, lexeme, raw_len, line);
                vacant.insert(entry).id()
            }
        }
    }

    /// Finds the entry `raw` would collapse to, without registering anything.
    pub fn lookup(&self, raw: &str) -> Option<SymbolId> {
        self.entries
            .get_index_of(normalize(raw).as_str())
            .map(|position| SymbolId(position + 1))
    }

    pub fn get(&self, id: SymbolId) -> Option<&SymbolEntry> {
        let position = id.0.checked_sub(1)?;
        self.entries.get_index(position).map(|(_, entry)| entry)
    }

    /// Returns false when `id` does not belong to this table.
    pub fn set_kind(&mut self, id: SymbolId, kind: SymbolKind) -> bool {
        let Some(position) = id.0.checked_sub(1) else {
            return false;
        };
        match self.entries.get_index_mut(position) {
            Some((_, entry)) => {
                entry.set_kind(kind);
                true
            }
            None => false,
        }
    }

    /// All entries in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = &SymbolEntry> + '_ {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
