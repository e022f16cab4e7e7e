//! C-subset vocabulary registries.
//!
//! Callers work with **stable IDs** (e.g. [`keywords::KeywordId`], [`operators::OperatorId`]) and look up
//! spellings/metadata via registry tables instead of scattering string comparisons across the front end.
//!
//! ## Examples
//! ```rust
//! use cstep_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```

pub mod delimiters;
pub mod keywords;
pub mod operators;
pub mod types;
pub mod vocabulary;
