use strum::IntoStaticStr;

use crate::{error::LexError, keyword::Keyword, symbol::SymbolId};

/// Token categories. The strum string is the atom code written to reports;
/// `NotEqual` and its `#` alias share a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr)]
pub enum TokenKind {
    Keyword(Keyword),
    #[strum(to_string = "IDN01")]
    Identifier,
    #[strum(to_string = "IDN02")]
    IntegerLiteral,
    #[strum(to_string = "IDN03")]
    RealLiteral,
    #[strum(to_string = "IDN04")]
    StringLiteral,
    #[strum(to_string = "IDN05")]
    CharLiteral,
    #[strum(to_string = "SRS01")]
    Semicolon,
    #[strum(to_string = "SRS02")]
    Comma,
    #[strum(to_string = "SRS03")]
    Colon,
    #[strum(to_string = "SRS04")]
    Assign,
    #[strum(to_string = "SRS05")]
    Question,
    #[strum(to_string = "SRS06")]
    LeftParen,
    #[strum(to_string = "SRS07")]
    RightParen,
    #[strum(to_string = "SRS08")]
    LeftBracket,
    #[strum(to_string = "SRS09")]
    RightBracket,
    #[strum(to_string = "SRS10")]
    LeftBrace,
    #[strum(to_string = "SRS11")]
    RightBrace,
    #[strum(to_string = "SRS12")]
    Plus,
    #[strum(to_string = "SRS13")]
    Subtract,
    #[strum(to_string = "SRS14")]
    Multiply,
    #[strum(to_string = "SRS15")]
    Divide,
    #[strum(to_string = "SRS16")]
    Mod,
    #[strum(to_string = "SRS17")]
    Equal,
    #[strum(to_string = "SRS18")]
    NotEqual,
    #[strum(to_string = "SRS18")]
    Hash,
    #[strum(to_string = "SRS19")]
    Less,
    #[strum(to_string = "SRS20")]
    LessEqual,
    #[strum(to_string = "SRS21")]
    Greater,
    #[strum(to_string = "SRS22")]
    GreaterEqual,
    #[strum(to_string = "EOF")]
    Eof,
    #[strum(to_string = "ERR")]
    Error,
}

impl TokenKind {
    pub fn code(&self) -> &'static str {
        match self {
            TokenKind::Keyword(keyword) => keyword.code(),
            other => other.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
    pub(crate) line: u32,
    pub(crate) column: u32,
    pub(crate) error: Option<LexError>,
    pub(crate) symbol: Option<SymbolId>,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
            error: None,
            symbol: None,
        }
    }

    pub(crate) fn identifier(lexeme: String, symbol: SymbolId, line: u32, column: u32) -> Self {
        Self {
            symbol: Some(symbol),
            ..Self::new(TokenKind::Identifier, lexeme, line, column)
        }
    }

    pub(crate) fn error(error: LexError, lexeme: impl Into<String>, column: u32) -> Self {
        Self {
            kind: TokenKind::Error,
            lexeme: lexeme.into(),
            line: error.line(),
            column,
            error: Some(error),
            symbol: None,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Diagnostic for `TokenKind::Error` tokens, `None` otherwise.
    pub fn lex_error(&self) -> Option<&LexError> {
        self.error.as_ref()
    }

    /// Symbol table entry for `TokenKind::Identifier` tokens.
    pub fn symbol(&self) -> Option<SymbolId> {
        self.symbol
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_equal_and_hash_share_code() {
        assert_eq!(TokenKind::NotEqual.code(), "SRS18");
        assert_eq!(TokenKind::Hash.code(), TokenKind::NotEqual.code());
        assert_ne!(TokenKind::Hash, TokenKind::NotEqual);
    }

    #[test]
    fn test_keyword_code_comes_from_keyword() {
        assert_eq!(TokenKind::Keyword(Keyword::Program).code(), "PRS11");
        assert_eq!(TokenKind::Keyword(Keyword::Print).code(), "PRS23");
    }

    #[test]
    fn test_symbol_codes() {
        assert_eq!(TokenKind::Identifier.code(), "IDN01");
        assert_eq!(TokenKind::Divide.code(), "SRS15");
        assert_eq!(TokenKind::GreaterEqual.code(), "SRS22");
        assert_eq!(TokenKind::Eof.code(), "EOF");
        assert_eq!(TokenKind::Error.code(), "ERR");
    }

    #[test]
    fn test_error_token_takes_line_from_diagnostic() {
        let token = Token::error(LexError::UnterminatedString { line: 7 }, "\"abc", 3);
        assert_eq!(token.kind(), TokenKind::Error);
        assert_eq!(token.line(), 7);
        assert_eq!(token.column(), 3);
        assert_eq!(token.lex_error(), Some(&LexError::UnterminatedString { line: 7 }));
    }
}
