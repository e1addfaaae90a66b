use std::{
    iter::{FusedIterator, Peekable},
    str::Chars,
};

use tracing::{debug, trace};

use crate::{
    error::{LexError, ScanError},
    source::decode,
    symbol::{SymbolTable, normalize},
    token::{Token, TokenKind},
};

/// Pull-based scanner over one source text.
///
/// Holds a single character of lookahead. Identifiers are registered in the
/// borrowed [`SymbolTable`] as they are scanned. The iterator yields exactly
/// one `Eof` token and then stops; [`Scanner::next_token`] keeps answering
/// `Eof` for as long as it is called.
#[derive(Debug)]
pub struct Scanner<'a, 't> {
    inner: Peekable<Chars<'a>>,
    table: &'t mut SymbolTable,
    line: u32,
    // characters consumed on the current line
    column: u32,
    finished: bool,
}

impl<'a, 't> Scanner<'a, 't> {
    pub fn new(text: &'a str, table: &'t mut SymbolTable) -> Self {
        table.init();
        Self {
            inner: text.chars().peekable(),
            table,
            line: 1,
            column: 0,
            finished: false,
        }
    }

    pub fn from_bytes(bytes: &'a [u8], table: &'t mut SymbolTable) -> Result<Self, ScanError> {
        Ok(Self::new(decode(bytes)?, table))
    }

    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!(code = token.kind().code(), lexeme = token.lexeme(), line = token.line(), "token");
        if token.is_eof() {
            self.finished = true;
        }
        token
    }

    #[inline]
    fn track(&mut self, c: char) -> char {
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        c
    }

    #[inline]
    fn peek(&mut self) -> Option<char> {
        self.inner.peek().copied()
    }

    #[inline]
    fn bump(&mut self) -> Option<char> {
        self.inner.next().map(|c| self.track(c))
    }

    #[inline]
    fn bump_if(&mut self, func: impl FnOnce(&char) -> bool) -> Option<char> {
        self.inner.next_if(func).map(|c| self.track(c))
    }

    #[inline]
    fn eat(&mut self, expected: char) -> bool {
        self.bump_if(|c| *c == expected).is_some()
    }

    // 跳过空白符
    #[inline]
    fn skip_whitespace(&mut self) {
        while self.bump_if(|c| matches!(c, ' ' | '\t' | '\r' | '\n')).is_some() {}
    }

    fn skip_line_comment(&mut self) {
        while self.bump_if(|c| *c != '\n').is_some() {}
    }

    /// Consumes a block comment body after `/*`. Returns false when the input
    /// ends before `*/`.
    fn skip_block_comment(&mut self) -> bool {
        while let Some(c) = self.bump() {
            if c == '*' && self.eat('/') {
                return true;
            }
        }
        false
    }

    fn take_digits(&mut self, text: &mut String) {
        while let Some(c) = self.bump_if(|c| c.is_numeric()) {
            text.push(c);
        }
    }

    fn eof(&self) -> Token {
        Token::new(TokenKind::Eof, "EOF", self.line, self.column + 1)
    }

    fn malformed(&self, error: LexError, text: String, column: u32) -> Token {
        debug!(%error, lexeme = %text, "lexical error");
        Token::error(error, text, column)
    }

    fn scan_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let Some(c) = self.peek() else {
                return self.eof();
            };
            let (line, column) = (self.line, self.column + 1);

            match c {
                '/' => {
                    self.bump();
                    match self.peek() {
                        Some('/') => self.skip_line_comment(),
                        Some('*') => {
                            self.bump();
                            if !self.skip_block_comment() {
                                trace!(line, "input ended inside block comment");
                                return self.eof();
                            }
                        }
                        _ => return Token::new(TokenKind::Divide, "/", line, column),
                    }
                }
                c if c.is_alphabetic() || c == '_' => return self.scan_word(line, column),
                c if c.is_numeric() => return self.scan_number(line, column),
                '"' => return self.scan_string(line, column),
                '\'' => return self.scan_char(line, column),
                c => {
                    self.bump();
                    if let Some(token) = self.scan_symbol(c, line, column) {
                        return token;
                    }
                    trace!(?c, line, column, "skipping unrecognized character");
                }
            }
        }
    }

    // 匹配标识符或保留字
    fn scan_word(&mut self, line: u32, column: u32) -> Token {
        let mut raw = String::new();
        while let Some(c) = self.bump_if(|c| c.is_alphanumeric() || *c == '_') {
            raw.push(c);
        }

        if let Some(keyword) = self.table.classify(&raw) {
            return Token::new(TokenKind::Keyword(keyword), raw.to_uppercase(), line, column);
        }

        let symbol = self.table.register_identifier(&raw, line);
        Token::identifier(normalize(&raw), symbol, line, column)
    }

    // 匹配数字
    fn scan_number(&mut self, line: u32, column: u32) -> Token {
        let mut text = String::new();
        self.take_digits(&mut text);

        if !self.eat('.') {
            return Token::new(TokenKind::IntegerLiteral, text, line, column);
        }

        text.push('.');
        self.take_digits(&mut text);
        if let Some(e) = self.bump_if(|c| matches!(c, 'e' | 'E')) {
            text.push(e);
            if let Some(sign) = self.bump_if(|c| matches!(c, '+' | '-')) {
                text.push(sign);
            }
            self.take_digits(&mut text);
        }
        Token::new(TokenKind::RealLiteral, text, line, column)
    }

    // 匹配字符串
    fn scan_string(&mut self, line: u32, column: u32) -> Token {
        self.bump();
        let mut text = String::from('"');
        while let Some(c) = self.bump_if(|c| *c != '"' && *c != '\n') {
            text.push(c);
        }

        if self.eat('"') {
            text.push('"');
            Token::new(TokenKind::StringLiteral, text, line, column)
        } else {
            self.malformed(LexError::UnterminatedString { line }, text, column)
        }
    }

    fn scan_char(&mut self, line: u32, column: u32) -> Token {
        self.bump();
        let mut text = String::from('\'');
        let error = LexError::MalformedCharacter { line };

        if self.eat('\'') {
            text.push('\'');
            return self.malformed(error, text, column);
        }

        match self.bump_if(|c| *c != '\n') {
            Some(c) => text.push(c),
            None => return self.malformed(error, text, column),
        }

        if self.eat('\'') {
            text.push('\'');
            Token::new(TokenKind::CharLiteral, text, line, column)
        } else {
            self.malformed(error, text, column)
        }
    }

    /// Classifies an already consumed symbol character, extending it with
    /// the lookahead where a two-character operator exists.
    fn scan_symbol(&mut self, c: char, line: u32, column: u32) -> Option<Token> {
        let (kind, lexeme) = match c {
            ';' => (TokenKind::Semicolon, ";"),
            ',' => (TokenKind::Comma, ","),
            '?' => (TokenKind::Question, "?"),
            '(' => (TokenKind::LeftParen, "("),
            ')' => (TokenKind::RightParen, ")"),
            '[' => (TokenKind::LeftBracket, "["),
            ']' => (TokenKind::RightBracket, "]"),
            '{' => (TokenKind::LeftBrace, "{"),
            '}' => (TokenKind::RightBrace, "}"),
            '+' => (TokenKind::Plus, "+"),
            '-' => (TokenKind::Subtract, "-"),
            '*' => (TokenKind::Multiply, "*"),
            '%' => (TokenKind::Mod, "%"),
            '#' => (TokenKind::Hash, "#"),
            ':' if self.eat('=') => (TokenKind::Assign, ":="),
            ':' => (TokenKind::Colon, ":"),
            '<' if self.eat('=') => (TokenKind::LessEqual, "<="),
            '<' => (TokenKind::Less, "<"),
            '>' if self.eat('=') => (TokenKind::GreaterEqual, ">="),
            '>' => (TokenKind::Greater, ">"),
            '=' if self.eat('=') => (TokenKind::Equal, "=="),
            '!' if self.eat('=') => (TokenKind::NotEqual, "!="),
            '=' | '!' => {
                let error = LexError::StrayOperator { op: c, line };
                return Some(self.malformed(error, c.to_string(), column));
            }
            _ => return None,
        };
        Some(Token::new(kind, lexeme, line, column))
    }
}

impl Iterator for Scanner<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl FusedIterator for Scanner<'_, '_> {}
