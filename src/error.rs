use simdutf8::basic::Utf8Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("invalid utf-8")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Diagnostic attached to an error token. Lines are where the bad lexeme starts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal starting on line {line}")]
    UnterminatedString { line: u32 },

    #[error("malformed character literal on line {line}")]
    MalformedCharacter { line: u32 },

    #[error("stray `{op}` on line {line}")]
    StrayOperator { op: char, line: u32 },
}

impl LexError {
    pub fn line(&self) -> u32 {
        match self {
            LexError::UnterminatedString { line }
            | LexError::MalformedCharacter { line }
            | LexError::StrayOperator { line, .. } => *line,
        }
    }
}
