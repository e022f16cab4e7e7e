//! Define the reserved keyword vocabulary for the C subset.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) recording canonical spellings and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** (`Int` is an identifier, `int` is a keyword).
//! - The full C89 keyword set is reserved even though the grammar only uses the declaration types. Reserving them
//!   keeps `while = 1;` from silently becoming an assignment to a variable called `while`.
//!
//! ## Examples
//! ```rust
//! use cstep_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("double"), Some(KeywordId::Double));
//! assert_eq!(keywords::category(KeywordId::Double), KeywordCategory::Type);
//! assert_eq!(keywords::from_str("Double"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordId {
    // Types
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
    Signed,
    Unsigned,
    Void,

    // Storage classes / qualifiers
    Auto,
    Const,
    Extern,
    Register,
    Static,
    Volatile,

    // Aggregate / type definitions
    Enum,
    Struct,
    Typedef,
    Union,

    // Control flow
    Break,
    Case,
    Continue,
    Default,
    Do,
    Else,
    For,
    Goto,
    If,
    Return,
    Switch,
    While,

    // Operator keywords
    Sizeof,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Type,
    Storage,
    Definition,
    ControlFlow,
    Operator,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Types
    info(KeywordId::Char, "char", KeywordCategory::Type),
    info(KeywordId::Double, "double", KeywordCategory::Type),
    info(KeywordId::Float, "float", KeywordCategory::Type),
    info(KeywordId::Int, "int", KeywordCategory::Type),
    info(KeywordId::Long, "long", KeywordCategory::Type),
    info(KeywordId::Short, "short", KeywordCategory::Type),
    info(KeywordId::Signed, "signed", KeywordCategory::Type),
    info(KeywordId::Unsigned, "unsigned", KeywordCategory::Type),
    info(KeywordId::Void, "void", KeywordCategory::Type),
    // Storage classes / qualifiers
    info(KeywordId::Auto, "auto", KeywordCategory::Storage),
    info(KeywordId::Const, "const", KeywordCategory::Storage),
    info(KeywordId::Extern, "extern", KeywordCategory::Storage),
    info(KeywordId::Register, "register", KeywordCategory::Storage),
    info(KeywordId::Static, "static", KeywordCategory::Storage),
    info(KeywordId::Volatile, "volatile", KeywordCategory::Storage),
    // Aggregate / type definitions
    info(KeywordId::Enum, "enum", KeywordCategory::Definition),
    info(KeywordId::Struct, "struct", KeywordCategory::Definition),
    info(KeywordId::Typedef, "typedef", KeywordCategory::Definition),
    info(KeywordId::Union, "union", KeywordCategory::Definition),
    // Control flow
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow),
    info(KeywordId::Case, "case", KeywordCategory::ControlFlow),
    info(KeywordId::Continue, "continue", KeywordCategory::ControlFlow),
    info(KeywordId::Default, "default", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Goto, "goto", KeywordCategory::ControlFlow),
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Return, "return", KeywordCategory::ControlFlow),
    info(KeywordId::Switch, "switch", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    // Operator keywords
    info(KeywordId::Sizeof, "sizeof", KeywordCategory::Operator),
];

/// Resolve a spelling to a keyword id.
///
/// ## Returns
/// - `Some(KeywordId)` if `s` is reserved, `None` for ordinary identifiers.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a keyword.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Return the registry entry for a keyword.
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    // Every `KeywordId` variant has exactly one row in `KEYWORDS` (checked by the guardrail tests).
    match KEYWORDS.iter().find(|k| k.id == id) {
        Some(info) => info,
        None => unreachable!("keyword info missing for {id:?}"),
    }
}

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_keyword_count() {
        assert_eq!(KEYWORDS.len(), 32);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(from_str("int"), Some(KeywordId::Int));
        assert_eq!(from_str("INT"), None);
        assert_eq!(from_str("main"), None);
    }

    #[test]
    fn test_sizeof_is_operator_keyword() {
        assert_eq!(category(KeywordId::Sizeof), KeywordCategory::Operator);
    }
}
