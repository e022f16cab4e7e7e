//! Lexical and syntax errors.
//!
//! The two stages fail with disjoint error types. Both carry the source line (and the lexer also the column) for
//! callers that only want numbers, plus a byte [`SourceSpan`] so `miette` can render the offending text.
//!
//! Neither stage recovers: the first error aborts its stage and is the only diagnostic for that input.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::stream::Position;

/// Raised by the lexer on an invalid character, a malformed number or an unterminated string.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message} at line {line}, column {column}")]
#[diagnostic(code(cstep::lexical))]
pub struct LexicalError {
    pub message: String,
    pub line: usize,
    pub column: usize,
    #[label("here")]
    pub span: SourceSpan,
}

impl LexicalError {
    /// Create an error pointing at a single character.
    pub fn new(message: impl Into<String>, at: Position) -> Self {
        Self::spanning(message, at, 1)
    }

    /// Create an error covering `len` bytes starting at `at`.
    pub fn spanning(message: impl Into<String>, at: Position, len: usize) -> Self {
        Self {
            message: message.into(),
            line: at.line,
            column: at.column,
            span: (at.offset, len).into(),
        }
    }
}

/// Raised by the parser when the token stream does not match the grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{message} at line {line}")]
#[diagnostic(code(cstep::syntax))]
pub struct SyntaxError {
    pub message: String,
    pub line: usize,
    /// Token kind or literal spelling the grammar required, when one was specific.
    pub expected: Option<String>,
    /// Token kind or literal spelling actually present.
    pub found: Option<String>,
    #[label("here")]
    pub span: SourceSpan,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, line: usize, span: SourceSpan) -> Self {
        Self {
            message: message.into(),
            line,
            expected: None,
            found: None,
            span,
        }
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }
}

/// Either front-end failure, so pipelines can use `?` across both stages.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum FrontendError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexical(#[from] LexicalError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),
}

impl FrontendError {
    /// The stage that failed, as used in response envelopes (`"lexical"` / `"syntax"`).
    pub fn kind(&self) -> &'static str {
        match self {
            FrontendError::Lexical(_) => "lexical",
            FrontendError::Syntax(_) => "syntax",
        }
    }

    pub fn line(&self) -> usize {
        match self {
            FrontendError::Lexical(e) => e.line,
            FrontendError::Syntax(e) => e.line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_display_includes_position() {
        let err = LexicalError::new(
            "Invalid character '#'",
            Position {
                offset: 4,
                line: 2,
                column: 3,
            },
        );
        assert_eq!(err.to_string(), "Invalid character '#' at line 2, column 3");
        assert_eq!(err.span, SourceSpan::from((4usize, 1usize)));
    }

    #[test]
    fn test_syntax_builder() {
        let err = SyntaxError::new("Expected IDENTIFIER, got INTEGER", 1, (4usize, 1usize).into())
            .with_expected("IDENTIFIER")
            .with_found("INTEGER");
        assert_eq!(err.expected.as_deref(), Some("IDENTIFIER"));
        assert_eq!(err.found.as_deref(), Some("INTEGER"));
        assert_eq!(err.to_string(), "Expected IDENTIFIER, got INTEGER at line 1");
    }

    #[test]
    fn test_frontend_error_kind() {
        let lex: FrontendError = LexicalError::new("x", Position::default()).into();
        let syn: FrontendError = SyntaxError::new("y", 3, (0usize, 0usize).into()).into();
        assert_eq!(lex.kind(), "lexical");
        assert_eq!(syn.kind(), "syntax");
        assert_eq!(syn.line(), 3);
    }
}
