//! Delimiter vocabulary.
//!
//! Single-character punctuation that is never part of an operator: brackets, braces, separators and the statement
//! terminator.
//!
//! ## Examples
//! ```rust
//! use cstep_core::lang::delimiters::{self, DelimiterId};
//!
//! assert_eq!(delimiters::from_char(';'), Some(DelimiterId::Semicolon));
//! assert_eq!(delimiters::as_char(DelimiterId::LParen), '(');
//! ```

/// Stable identifier for delimiter tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DelimiterId {
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Semicolon,
    Comma,
    Dot,
    Colon,
}

/// Metadata for a delimiter.
#[derive(Debug, Clone, Copy)]
pub struct DelimiterInfo {
    pub id: DelimiterId,
    pub spelling: char,
}

/// Registry of all delimiters.
pub const DELIMITERS: &[DelimiterInfo] = &[
    info(DelimiterId::LParen, '('),
    info(DelimiterId::RParen, ')'),
    info(DelimiterId::LBrace, '{'),
    info(DelimiterId::RBrace, '}'),
    info(DelimiterId::LBracket, '['),
    info(DelimiterId::RBracket, ']'),
    info(DelimiterId::Semicolon, ';'),
    info(DelimiterId::Comma, ','),
    info(DelimiterId::Dot, '.'),
    info(DelimiterId::Colon, ':'),
];

/// Resolve a character to a delimiter.
pub fn from_char(c: char) -> Option<DelimiterId> {
    DELIMITERS.iter().find(|d| d.spelling == c).map(|d| d.id)
}

/// Resolve a one-character spelling to a delimiter.
pub fn from_str(s: &str) -> Option<DelimiterId> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => from_char(c),
        _ => None,
    }
}

/// Return the delimiter character.
pub fn as_char(id: DelimiterId) -> char {
    match DELIMITERS.iter().find(|d| d.id == id) {
        Some(info) => info.spelling,
        None => unreachable!("delimiter info missing for {id:?}"),
    }
}

const fn info(id: DelimiterId, spelling: char) -> DelimiterInfo {
    DelimiterInfo { id, spelling }
}
