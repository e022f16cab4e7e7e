//! Operator vocabulary.
//!
//! This module defines the canonical operator set: single-character operators plus the two-character operators the
//! lexer recognises by one character of lookahead.
//!
//! ## Notes
//! - Lookup via [`from_str`] is exact.
//! - The lexer decides between `=` and `==` (etc.) by maximal munch over at most two characters; there are no
//!   three-character operators.
//!
//! ## Examples
//! ```rust
//! use cstep_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("<="), Some(OperatorId::LtEq));
//! assert!(operators::is_start('<'));
//! assert!(!operators::is_start('#'));
//! ```

/// Broad grouping of operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Arithmetic,
    Comparison,
    Logical,
    Bitwise,
    Assignment,
    Increment,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    AndAnd,
    OrOr,
    Bang,

    // Bitwise
    Amp,
    Pipe,
    Caret,

    // Assignment
    Eq,

    // Increment / decrement
    PlusPlus,
    MinusMinus,
}

/// Metadata for an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub category: OperatorCategory,
}

impl OperatorInfo {
    /// Return `true` for the two-character operators (`==`, `&&`, ...).
    pub fn is_compound(&self) -> bool {
        self.spelling.len() > 1
    }
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+", OperatorCategory::Arithmetic),
    op(OperatorId::Minus, "-", OperatorCategory::Arithmetic),
    op(OperatorId::Star, "*", OperatorCategory::Arithmetic),
    op(OperatorId::Slash, "/", OperatorCategory::Arithmetic),
    op(OperatorId::Percent, "%", OperatorCategory::Arithmetic),
    // Comparison
    op(OperatorId::EqEq, "==", OperatorCategory::Comparison),
    op(OperatorId::NotEq, "!=", OperatorCategory::Comparison),
    op(OperatorId::Lt, "<", OperatorCategory::Comparison),
    op(OperatorId::LtEq, "<=", OperatorCategory::Comparison),
    op(OperatorId::Gt, ">", OperatorCategory::Comparison),
    op(OperatorId::GtEq, ">=", OperatorCategory::Comparison),
    // Logical
    op(OperatorId::AndAnd, "&&", OperatorCategory::Logical),
    op(OperatorId::OrOr, "||", OperatorCategory::Logical),
    op(OperatorId::Bang, "!", OperatorCategory::Logical),
    // Bitwise
    op(OperatorId::Amp, "&", OperatorCategory::Bitwise),
    op(OperatorId::Pipe, "|", OperatorCategory::Bitwise),
    op(OperatorId::Caret, "^", OperatorCategory::Bitwise),
    // Assignment
    op(OperatorId::Eq, "=", OperatorCategory::Assignment),
    // Increment / decrement
    op(OperatorId::PlusPlus, "++", OperatorCategory::Increment),
    op(OperatorId::MinusMinus, "--", OperatorCategory::Increment),
];

/// Resolve an operator spelling to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return `true` if `c` is the first character of any operator.
pub fn is_start(c: char) -> bool {
    OPERATORS.iter().any(|o| o.spelling.starts_with(c))
}

pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    match OPERATORS.iter().find(|o| o.id == id) {
        Some(info) => info,
        None => unreachable!("operator info missing for {id:?}"),
    }
}

const fn op(id: OperatorId, spelling: &'static str, category: OperatorCategory) -> OperatorInfo {
    OperatorInfo { id, spelling, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_operators() {
        let compound: Vec<&str> = OPERATORS
            .iter()
            .filter(|o| o.is_compound())
            .map(|o| o.spelling)
            .collect();
        assert_eq!(compound, vec!["==", "!=", "<=", ">=", "&&", "||", "++", "--"]);
    }

    #[test]
    fn test_every_compound_prefix_is_a_start() {
        for o in OPERATORS.iter().filter(|o| o.is_compound()) {
            let first = o.spelling.chars().next().unwrap();
            assert!(is_start(first), "{:?} has no start character", o.id);
        }
    }
}
