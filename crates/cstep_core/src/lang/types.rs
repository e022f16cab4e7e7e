//! Declaration type vocabulary.
//!
//! The subset of type keywords that may introduce a variable declaration, with the fixed storage sizes the symbol
//! table reports for them.
//!
//! ## Examples
//! ```rust
//! use cstep_core::lang::keywords::KeywordId;
//! use cstep_core::lang::types::{self, DeclTypeId};
//!
//! assert_eq!(types::from_keyword(KeywordId::Double), Some(DeclTypeId::Double));
//! assert_eq!(types::size_of(DeclTypeId::Double), 8);
//! assert_eq!(types::from_keyword(KeywordId::Void), None);
//! ```

use super::keywords::KeywordId;

/// Stable identifier for declaration types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeclTypeId {
    Int,
    Float,
    Char,
    Double,
}

/// Metadata for a declaration type.
#[derive(Debug, Clone, Copy)]
pub struct DeclTypeInfo {
    pub id: DeclTypeId,
    pub keyword: KeywordId,
    pub canonical: &'static str,
    pub size_bytes: u8,
}

/// Registry of declaration types.
pub const DECL_TYPES: &[DeclTypeInfo] = &[
    info(DeclTypeId::Int, KeywordId::Int, "int", 4),
    info(DeclTypeId::Float, KeywordId::Float, "float", 4),
    info(DeclTypeId::Char, KeywordId::Char, "char", 1),
    info(DeclTypeId::Double, KeywordId::Double, "double", 8),
];

/// Resolve a keyword to the declaration type it introduces, if any.
pub fn from_keyword(keyword: KeywordId) -> Option<DeclTypeId> {
    DECL_TYPES.iter().find(|t| t.keyword == keyword).map(|t| t.id)
}

/// Resolve a spelling to a declaration type.
pub fn from_str(s: &str) -> Option<DeclTypeId> {
    DECL_TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}

/// Return the canonical spelling of a declaration type.
pub fn as_str(id: DeclTypeId) -> &'static str {
    info_for(id).canonical
}

/// Return the storage size, in bytes, of a declaration type.
pub fn size_of(id: DeclTypeId) -> u8 {
    info_for(id).size_bytes
}

pub fn info_for(id: DeclTypeId) -> &'static DeclTypeInfo {
    match DECL_TYPES.iter().find(|t| t.id == id) {
        Some(info) => info,
        None => unreachable!("declaration type info missing for {id:?}"),
    }
}

const fn info(id: DeclTypeId, keyword: KeywordId, canonical: &'static str, size_bytes: u8) -> DeclTypeInfo {
    DeclTypeInfo {
        id,
        keyword,
        canonical,
        size_bytes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(size_of(DeclTypeId::Int), 4);
        assert_eq!(size_of(DeclTypeId::Float), 4);
        assert_eq!(size_of(DeclTypeId::Char), 1);
        assert_eq!(size_of(DeclTypeId::Double), 8);
    }

    #[test]
    fn test_spelling_matches_keyword() {
        for t in DECL_TYPES {
            assert_eq!(crate::lang::keywords::as_str(t.keyword), t.canonical);
        }
    }

    #[test]
    fn test_non_declaration_types() {
        assert_eq!(from_keyword(KeywordId::Long), None);
        assert_eq!(from_keyword(KeywordId::While), None);
        assert_eq!(from_str("long"), None);
    }
}
