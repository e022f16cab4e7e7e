//! Recursive-descent parser for the cstep C subset.
//!
//! Converts a token list (as produced by [`crate::lexer`]) into a [`Program`], recording a [`ParserStep`] trace that
//! mirrors the grammar's call nesting:
//!
//! ```text
//! Program             := Statement*
//! Statement           := Declaration | IdentifierStatement
//! Declaration         := TYPE_KEYWORD IDENTIFIER ('=' Expression)? ';'
//! IdentifierStatement := IDENTIFIER ( FunctionCallTail | AssignTail )
//! FunctionCallTail    := '(' (Expression (',' Expression)*)? ')' ';'
//! AssignTail          := '=' Expression ';'
//! Expression          := AdditiveExpr
//! AdditiveExpr        := MultiplicativeExpr (('+' | '-') MultiplicativeExpr)*
//! MultiplicativeExpr  := PrimaryExpr (('*' | '/') PrimaryExpr)*
//! PrimaryExpr         := NUMBER | STRING | IDENTIFIER | '(' Expression ')'
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use cstep_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("a = 1 - 2 - 3;").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.to_string(), "a = ((1 - 2) - 3);\n");
//! ```

use cstep_core::lang::delimiters::{self, DelimiterId};
use cstep_core::lang::operators::{self, OperatorId};
use cstep_core::lang::vocabulary::Vocabulary;
use tracing::{debug, trace};

use crate::ast::*;
use crate::diagnostics::SyntaxError;
use crate::lexer::{Token, TokenKind};
use crate::trace::{ParseAction, ParserStep, Routine, RoutineStack, StepTrace};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
