//! Lexer for Reckon entry text.
//!
//! The lexer converts entry text into a stream of tokens. Besides the
//! parser, the stack-entry resolver lexes entries to detect runs of bare
//! operator symbols.

use reckon_foundation::{Error, Result};

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Two-character operator spellings, matched before single characters.
const TWO_CHAR_OPS: [&str; 8] = ["||", "&&", "<<", ">>", "<=", ">=", "==", "!="];

/// Single-character operator spellings.
const ONE_CHAR_OPS: [&str; 11] = ["+", "-", "*", "/", "%", "&", "|", "^", "<", ">", "~"];

/// Lexer for Reckon entry text.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Current byte offset in source.
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the next token from the source.
    ///
    /// # Errors
    /// Returns a parse error for unterminated strings, malformed numbers,
    /// and unexpected characters.
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        let start = self.position;
        let Some(c) = self.peek_char() else {
            return Ok(Token::new(TokenKind::Eof, Span::new(start, start)));
        };

        if c.is_ascii_digit() {
            return self.lex_number(start);
        }
        if c.is_alphabetic() || c == '_' {
            return Ok(self.lex_ident(start));
        }
        if c == '"' {
            return self.lex_string(start);
        }

        for sym in TWO_CHAR_OPS {
            if self.rest().starts_with(sym) {
                self.position += sym.len();
                return Ok(Token::new(TokenKind::Op(sym), Span::new(start, self.position)));
            }
        }

        // `=` only after `==` has been ruled out.
        let kind = match c {
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            ',' => Some(TokenKind::Comma),
            '=' => Some(TokenKind::Assign),
            '!' => Some(TokenKind::Op("!")),
            _ => None,
        };
        if let Some(kind) = kind {
            self.position += c.len_utf8();
            return Ok(Token::new(kind, Span::new(start, self.position)));
        }

        for sym in ONE_CHAR_OPS {
            if self.rest().starts_with(sym) {
                self.position += sym.len();
                return Ok(Token::new(TokenKind::Op(sym), Span::new(start, self.position)));
            }
        }

        Err(Error::parse(format!("unexpected character '{c}'"), start))
    }

    /// Lexes the remaining source into a token list ending with `Eof`.
    ///
    /// # Errors
    /// Returns the first lexical error encountered.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn rest(&self) -> &'src str {
        &self.source[self.position..]
    }

    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.position += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn lex_number(&mut self, start: usize) -> Result<Token> {
        // Radix literals: 0x.., 0b.., 0o..
        let rest = self.rest();
        if rest.starts_with("0x") || rest.starts_with("0b") || rest.starts_with("0o") {
            let radix = match &rest[1..2] {
                "x" => 16,
                "b" => 2,
                _ => 8,
            };
            self.position += 2;
            let digits_start = self.position;
            while let Some(c) = self.peek_char() {
                if c.is_ascii_alphanumeric() || c == '_' {
                    self.position += 1;
                } else {
                    break;
                }
            }
            let digits: String = self.source[digits_start..self.position]
                .chars()
                .filter(|c| *c != '_')
                .collect();
            let value = u64::from_str_radix(&digits, radix)
                .map_err(|_| Error::parse("malformed number literal", start))?;
            #[allow(clippy::cast_precision_loss)]
            let value = value as f64;
            return Ok(Token::new(TokenKind::Num(value), Span::new(start, self.position)));
        }

        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.position += 1;
        }
        if self.rest().starts_with('.')
            && self.source[self.position + 1..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_digit())
        {
            self.position += 1;
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.position += 1;
            }
        }
        if self.peek_char() == Some('e') || self.peek_char() == Some('E') {
            let mark = self.position;
            self.position += 1;
            if self.peek_char() == Some('+') || self.peek_char() == Some('-') {
                self.position += 1;
            }
            if self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                    self.position += 1;
                }
            } else {
                // Not an exponent after all (e.g. `2e` as in an identifier boundary).
                self.position = mark;
            }
        }

        let text = &self.source[start..self.position];
        let value: f64 = text
            .parse()
            .map_err(|_| Error::parse("malformed number literal", start))?;
        Ok(Token::new(TokenKind::Num(value), Span::new(start, self.position)))
    }

    fn lex_ident(&mut self, start: usize) -> Token {
        while self
            .peek_char()
            .is_some_and(|c| c.is_alphanumeric() || c == '_')
        {
            self.position += self.peek_char().map_or(0, char::len_utf8);
        }
        let text = self.source[start..self.position].to_string();
        Token::new(TokenKind::Ident(text), Span::new(start, self.position))
    }

    fn lex_string(&mut self, start: usize) -> Result<Token> {
        self.position += 1; // opening quote
        let mut text = String::new();
        loop {
            let Some(c) = self.peek_char() else {
                return Err(Error::parse("unterminated string literal", start));
            };
            self.position += c.len_utf8();
            match c {
                '"' => return Ok(Token::new(TokenKind::Str(text), Span::new(start, self.position))),
                '\\' => {
                    let Some(esc) = self.peek_char() else {
                        return Err(Error::parse("unterminated string literal", start));
                    };
                    self.position += esc.len_utf8();
                    match esc {
                        'n' => text.push('\n'),
                        't' => text.push('\t'),
                        '\\' => text.push('\\'),
                        '"' => text.push('"'),
                        _ => {
                            return Err(Error::parse(
                                format!("unknown escape '\\{esc}'"),
                                self.position - esc.len_utf8() - 1,
                            ));
                        }
                    }
                }
                _ => text.push(c),
            }
        }
    }
}
