//! Canonical language vocabulary for the cstep front end.
//!
//! This crate is intentionally small and dependency-free. It holds the fixed vocabulary of the C subset that the
//! lexer recognises (keywords, declaration types, operators, delimiters) as `const` registry tables, plus the
//! [`lang::vocabulary::Vocabulary`] value that bundles them into the read-only configuration a lexer borrows.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no mutable global state, and no syntax-tree types.
//! - The lexer/parser in `cstep_syntax` enforce syntax; registries only provide spellings and metadata.

pub mod lang;
