#![forbid(unsafe_code)]
//! cstep: a traced front end for a small C subset.
//!
//! The crate runs a lexer and a recursive-descent parser over one source string and returns every product a
//! step-by-step visualizer needs: tokens, the symbol table, the AST and the step traces of both stages.
//! The stages themselves live in `cstep_syntax`; the vocabulary registries in `cstep_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! let analysis = cstep::analyze("a = 1 + 2 * 3;");
//! assert!(analysis.is_success());
//! ```

pub mod analyze;
pub mod cli;
pub mod config;

pub use cstep_syntax::{ast, diagnostics, lexer, parser, symbols, trace};

pub use analyze::{Analysis, AnalysisFailure, AnalysisSuccess, analyze, analyze_with};
pub use config::AnalyzeConfig;
