//! Token types for the cstep lexer.
//!
//! Tokens keep the exact lexeme text. Vocabulary identity (which keyword, which operator) is recovered through the
//! registry-backed helpers in `crate::token_helpers`, so the parser never compares raw strings itself.

use std::fmt;

use serde::Serialize;

use crate::stream::Position;

// ============================================================================
// TOKEN TYPES
// ============================================================================

/// Kind of token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    Keyword,
    Identifier,
    Integer,
    Float,
    String,
    Operator,
    Delimiter,
    Eof,
}

impl TokenKind {
    /// Upper-case name used in messages and serialized output (`"IDENTIFIER"`).
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme with the position of its first character.
///
/// ## Notes
/// - STRING lexemes exclude the surrounding quotes.
/// - The EOF sentinel has an empty lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    #[serde(flatten)]
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// The end-of-input sentinel.
    pub fn eof(position: Position) -> Self {
        Self::new(TokenKind::Eof, "", position)
    }

    /// Source spelling of the token, re-quoting STRING lexemes.
    ///
    /// Joining the `source_text` of a token list with spaces yields text that lexes to the same kinds.
    pub fn source_text(&self) -> String {
        match self.kind {
            TokenKind::String => format!("\"{}\"", self.lexeme),
            _ => self.lexeme.clone(),
        }
    }

    /// Byte length of the token in the source text.
    pub fn source_len(&self) -> usize {
        match self.kind {
            TokenKind::String => self.lexeme.len() + 2,
            _ => self.lexeme.len(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, '{}', line {}>", self.kind, self.lexeme, self.position.line)
    }
}
