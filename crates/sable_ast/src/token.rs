//! Token information produced by the scanner.

use sable_core::text::TextSpan;
use std::fmt;

/// The kind of a token, for the subset of tokens the semantic core sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    // Operators that survive into the AST.
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    Equal,
    EqualEqual,
    BangEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    LeftParen,
    RightParen,
    // Keywords carried as tokens for diagnostics.
    And,
    Or,
    Return,
    Var,
    Fun,
    Class,
    Print,
}

/// A scanned token: its kind, the source text it covers, and where it sits.
///
/// Variable name identity throughout the resolver and runtime is by lexeme
/// text.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The text of the token.
    pub lexeme: String,
    /// Source position of the token.
    pub span: TextSpan,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: TextSpan) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// An identifier token at a position.
    pub fn identifier(lexeme: impl Into<String>, span: TextSpan) -> Self {
        Self::new(TokenKind::Identifier, lexeme, span)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' at {}", self.lexeme, self.span)
    }
}
