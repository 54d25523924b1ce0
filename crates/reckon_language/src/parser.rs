//! Parser for Reckon entry text.
//!
//! A precedence-climbing parser over the lexer, with one extra token of
//! lookahead to distinguish assignment from an expression. The
//! grammar is fixed: infix arithmetic, unary operators, function calls,
//! array literals, and top-level assignment.

use reckon_foundation::{Error, Result};

use crate::ast::Expr;
use crate::lexer::Lexer;
use crate::op::{BinOp, UnOp};
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parser for Reckon entry text.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token.
    current: Token,
    /// One token of extra lookahead (assignment detection).
    next: Token,
}

impl<'src> Parser<'src> {
    /// Creates a new parser for the given source.
    ///
    /// # Errors
    /// Returns an error if the leading tokens cannot be lexed.
    pub fn new(source: &'src str) -> Result<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        let next = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            next,
        })
    }

    /// Parses the whole source as one entry.
    ///
    /// An entry is either an assignment (`name = expr`) or an expression;
    /// trailing input is an error.
    ///
    /// # Errors
    /// Returns an error if the source cannot be parsed.
    pub fn parse(&mut self) -> Result<Expr> {
        let expr = self.parse_entry()?;
        if self.current.kind != TokenKind::Eof {
            return Err(self.unexpected("end of input"));
        }
        Ok(expr)
    }

    fn parse_entry(&mut self) -> Result<Expr> {
        // `ident =` opens an assignment; anything else is an expression.
        if let TokenKind::Ident(name) = self.current.kind.clone() {
            if self.next.kind == TokenKind::Assign {
                let name_span = self.current.span;
                self.advance()?; // name
                self.advance()?; // `=`
                let value = self.parse_binary(1)?;
                let span = name_span.to(value.span());
                return Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                    span,
                });
            }
        }
        self.parse_binary(1)
    }

    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr> {
        let mut lhs = self.parse_unary()?;
        loop {
            let Some(sym) = self.current.as_op() else {
                break;
            };
            let Some(op) = BinOp::from_symbol(sym) else {
                break;
            };
            if op.precedence() < min_prec {
                break;
            }
            self.advance()?;
            // Left-associative: the right subtree only binds tighter levels.
            let rhs = self.parse_binary(op.precedence() + 1)?;
            let span = lhs.span().to(rhs.span());
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
                span,
            };
        }
        Ok(lhs)
    }

    fn parse_unary(&mut self) -> Result<Expr> {
        if let Some(sym) = self.current.as_op() {
            if let Some(op) = UnOp::from_symbol(sym) {
                let start = self.current.span;
                self.advance()?;
                let operand = self.parse_unary()?;
                let span = start.to(operand.span());
                return Ok(Expr::Unary {
                    op,
                    operand: Box::new(operand),
                    span,
                });
            }
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        let span = self.current.span;
        match self.current.kind.clone() {
            TokenKind::Num(value) => {
                self.advance()?;
                Ok(Expr::Num(value, span))
            }
            TokenKind::Str(text) => {
                self.advance()?;
                Ok(Expr::Str(text, span))
            }
            TokenKind::Ident(name) => {
                self.advance()?;
                match name.as_str() {
                    "true" => Ok(Expr::Bool(true, span)),
                    "false" => Ok(Expr::Bool(false, span)),
                    _ if self.current.kind == TokenKind::LParen => self.parse_call(name, span),
                    _ => Ok(Expr::Ident(name, span)),
                }
            }
            TokenKind::LParen => {
                self.advance()?;
                let inner = self.parse_binary(1)?;
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(inner)
            }
            TokenKind::LBracket => {
                self.advance()?;
                let mut elements = Vec::new();
                if self.current.kind != TokenKind::RBracket {
                    loop {
                        elements.push(self.parse_binary(1)?);
                        if self.current.kind != TokenKind::Comma {
                            break;
                        }
                        self.advance()?;
                    }
                }
                let end = self.current.span;
                self.expect(&TokenKind::RBracket, "']'")?;
                Ok(Expr::Array(elements, span.to(end)))
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    fn parse_call(&mut self, name: String, name_span: Span) -> Result<Expr> {
        self.advance()?; // `(`
        let mut args = Vec::new();
        if self.current.kind != TokenKind::RParen {
            loop {
                args.push(self.parse_binary(1)?);
                if self.current.kind != TokenKind::Comma {
                    break;
                }
                self.advance()?;
            }
        }
        let end = self.current.span;
        self.expect(&TokenKind::RParen, "')'")?;
        Ok(Expr::Call {
            name,
            name_span,
            args,
            span: name_span.to(end),
        })
    }

    fn advance(&mut self) -> Result<()> {
        self.current = std::mem::replace(&mut self.next, self.lexer.next_token()?);
        Ok(())
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<()> {
        if &self.current.kind == kind {
            self.advance()
        } else {
            Err(self.unexpected(what))
        }
    }

    fn unexpected(&self, expected: &str) -> Error {
        Error::parse(
            format!("expected {expected}, found {:?}", self.current.kind),
            self.current.span.start,
        )
    }
}

/// Parses entry text into an expression tree.
///
/// # Errors
/// Returns an error if the source cannot be parsed.
pub fn parse(source: &str) -> Result<Expr> {
    Parser::new(source)?.parse()
}
