//! Syntax front end for the cstep C subset: character stream, lexer, symbol table, step traces, parser and AST.
//!
//! Both stages record a **step trace** next to their primary output: an append-only list of structured events
//! (state transitions, token and node creation) meant to drive a step-by-step visualizer. Traces are data, not
//! logging; operator-facing diagnostics go through `tracing`.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": no type checking, no scoping beyond first-declaration capture.
//! - Vocabulary identity (keywords/operators/delimiters) comes from `cstep_core::lang` registries.
//! - Every lexer and parser instance owns its own state, so independent analyses never share anything mutable.
//!
//! ## Examples
//! ```rust
//! use cstep_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("int x = 1 + 2;").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod stream;
pub mod symbols;
pub mod token_helpers;
pub mod trace;
