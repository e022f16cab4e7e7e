//! Read-only lexer configuration assembled from the registries.
//!
//! A [`Vocabulary`] indexes the const tables ([`KEYWORDS`], [`DECL_TYPES`], [`OPERATORS`], [`DELIMITERS`]) into
//! lookup maps once, and is then shared by reference with every lexer. Nothing in it is mutable after construction,
//! so concurrent analyses can share one instance without locking.
//!
//! ## Examples
//! ```rust
//! use cstep_core::lang::keywords::KeywordId;
//! use cstep_core::lang::types::DeclTypeId;
//! use cstep_core::lang::vocabulary::Vocabulary;
//!
//! let vocab = Vocabulary::c();
//! let kw = vocab.keyword("float").unwrap();
//! assert_eq!(kw, KeywordId::Float);
//! assert_eq!(vocab.declaration_type(kw), Some(DeclTypeId::Float));
//! assert!(vocab.is_operator_start('&'));
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use super::delimiters::{DELIMITERS, DelimiterId, DelimiterInfo};
use super::keywords::{KEYWORDS, KeywordId, KeywordInfo};
use super::operators::{OPERATORS, OperatorId, OperatorInfo};
use super::types::{DECL_TYPES, DeclTypeId, DeclTypeInfo};

/// Characters skipped between tokens.
pub const WHITESPACE: &[char] = &[' ', '\t', '\n'];

/// Indexed, immutable view over a keyword/operator/delimiter vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    keywords: HashMap<&'static str, KeywordId>,
    decl_types: HashMap<KeywordId, DeclTypeId>,
    operators: HashMap<&'static str, OperatorId>,
    operator_starts: HashSet<char>,
    delimiters: HashMap<char, DelimiterId>,
}

impl Vocabulary {
    /// Build a vocabulary from explicit registry tables.
    ///
    /// ## Notes
    /// - Declaration types whose keyword is not in `keywords` can never be triggered by the lexer; they are kept
    ///   anyway so callers can still query sizes.
    pub fn new(
        keywords: &[KeywordInfo],
        decl_types: &[DeclTypeInfo],
        operators: &[OperatorInfo],
        delimiters: &[DelimiterInfo],
    ) -> Self {
        Self {
            keywords: keywords.iter().map(|k| (k.canonical, k.id)).collect(),
            decl_types: decl_types.iter().map(|t| (t.keyword, t.id)).collect(),
            operators: operators.iter().map(|o| (o.spelling, o.id)).collect(),
            operator_starts: operators.iter().filter_map(|o| o.spelling.chars().next()).collect(),
            delimiters: delimiters.iter().map(|d| (d.spelling, d.id)).collect(),
        }
    }

    /// The full C-subset vocabulary, built on first use and shared for the life of the process.
    pub fn c() -> &'static Vocabulary {
        static VOCABULARY: OnceLock<Vocabulary> = OnceLock::new();
        VOCABULARY.get_or_init(|| Vocabulary::new(KEYWORDS, DECL_TYPES, OPERATORS, DELIMITERS))
    }

    /// Resolve an identifier spelling to a keyword, if reserved.
    pub fn keyword(&self, spelling: &str) -> Option<KeywordId> {
        self.keywords.get(spelling).copied()
    }

    /// Return the declaration type a keyword introduces, if any.
    pub fn declaration_type(&self, keyword: KeywordId) -> Option<DeclTypeId> {
        self.decl_types.get(&keyword).copied()
    }

    /// Resolve an operator spelling (one or two characters).
    pub fn operator(&self, spelling: &str) -> Option<OperatorId> {
        self.operators.get(spelling).copied()
    }

    pub fn is_operator_start(&self, c: char) -> bool {
        self.operator_starts.contains(&c)
    }

    pub fn delimiter(&self, c: char) -> Option<DelimiterId> {
        self.delimiters.get(&c).copied()
    }

    pub fn is_whitespace(&self, c: char) -> bool {
        WHITESPACE.contains(&c)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::c().clone()
    }
}

/// Check if a character can start an identifier: any Unicode letter or `_`.
pub fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Check if a character can continue an identifier: any Unicode letter or digit, or `_`.
pub fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check if a character can start or continue a number literal (ASCII digits only).
pub fn is_number_digit(c: char) -> bool {
    c.is_ascii_digit()
}
