//! Lexical front end for Caatinguage: a scanner producing classified
//! tokens and a symbol table of every identifier it met.

mod error;
mod keyword;
pub mod lexer;
pub mod report;
pub mod source;
pub mod symbol;
mod token;

pub use {
    error::{LexError, ScanError},
    keyword::{Keyword, ReservedWords},
    lexer::{Scanner, scan},
    symbol::{SymbolEntry, SymbolId, SymbolKind, SymbolTable},
    token::{Token, TokenKind},
};
