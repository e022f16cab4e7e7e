//! The lex-then-parse pipeline and its response envelopes.
//!
//! [`analyze`] runs both stages over one source string and returns an [`Analysis`]: either every product of a
//! successful run (tokens, both traces, symbol table, serialized AST) or a description of the first error plus the
//! traces recorded up to it. Both shapes serialize to camelCase JSON for transport.

use cstep_core::lang::vocabulary::Vocabulary;
use cstep_syntax::ast::{Program, ast_to_serializable};
use cstep_syntax::diagnostics::FrontendError;
use cstep_syntax::lexer::{Lexer, Token};
use cstep_syntax::parser::Parser;
use cstep_syntax::symbols::SymbolTable;
use cstep_syntax::trace::{LexerStep, ParserStep, TraceOptions};
use serde::Serialize;

use crate::config::AnalyzeConfig;

/// Products of a successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSuccess {
    pub success: bool,
    /// Every token except the EOF sentinel.
    pub tokens: Vec<Token>,
    pub lexer_trace: Vec<LexerStep>,
    pub parser_trace: Vec<ParserStep>,
    pub symbol_table: SymbolTable,
    pub ast: serde_json::Value,
    #[serde(skip)]
    pub program: Program,
}

/// First error of a failed run, with the traces recorded before it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisFailure {
    pub success: bool,
    /// `"lexical"` or `"syntax"`.
    pub error_kind: &'static str,
    pub message: String,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<String>,
    pub lexer_trace: Vec<LexerStep>,
    pub parser_trace: Vec<ParserStep>,
    #[serde(skip)]
    pub error: FrontendError,
}

impl AnalysisFailure {
    fn new(error: FrontendError, lexer_trace: Vec<LexerStep>, parser_trace: Vec<ParserStep>) -> Self {
        let (message, column, expected, found) = match &error {
            FrontendError::Lexical(e) => (e.message.clone(), Some(e.column), None, None),
            FrontendError::Syntax(e) => (e.message.clone(), None, e.expected.clone(), e.found.clone()),
        };
        Self {
            success: false,
            error_kind: error.kind(),
            message,
            line: error.line(),
            column,
            expected,
            found,
            lexer_trace,
            parser_trace,
            error,
        }
    }
}

/// Outcome of [`analyze`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Analysis {
    Success(Box<AnalysisSuccess>),
    Failure(Box<AnalysisFailure>),
}

impl Analysis {
    pub fn is_success(&self) -> bool {
        matches!(self, Analysis::Success(_))
    }

    pub fn success(&self) -> Option<&AnalysisSuccess> {
        match self {
            Analysis::Success(s) => Some(&**s),
            Analysis::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&AnalysisFailure> {
        match self {
            Analysis::Success(_) => None,
            Analysis::Failure(f) => Some(&**f),
        }
    }

    pub fn lexer_trace(&self) -> &[LexerStep] {
        match self {
            Analysis::Success(s) => &s.lexer_trace,
            Analysis::Failure(f) => &f.lexer_trace,
        }
    }

    pub fn parser_trace(&self) -> &[ParserStep] {
        match self {
            Analysis::Success(s) => &s.parser_trace,
            Analysis::Failure(f) => &f.parser_trace,
        }
    }

    /// Serialize the envelope, pretty-printed when `pretty` is set.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Analyze `source` with default options.
///
/// ## Examples
/// ```rust
/// let analysis = cstep::analyze("int x = 1 + 2;");
/// let ok = analysis.success().unwrap();
/// assert_eq!(ok.tokens.len(), 7);
/// assert_eq!(ok.symbol_table.get("x").unwrap().size_in_bytes, Some(4));
/// ```
pub fn analyze(source: &str) -> Analysis {
    analyze_with(source, &AnalyzeConfig::default())
}

/// Analyze `source`: lex it completely, then parse the token list.
///
/// The lexer runs to completion before the parser starts, so a lexical error means the parser never runs and the
/// failure carries an empty parser trace.
#[tracing::instrument(skip_all, fields(len = source.len()))]
pub fn analyze_with(source: &str, config: &AnalyzeConfig) -> Analysis {
    let options = TraceOptions {
        record: config.record_lexer_trace,
        symbol_snapshots: config.symbol_snapshots,
    };
    let vocab = Vocabulary::c();
    let mut lexer = Lexer::with_options(source, vocab, options);
    let lexed = lexer.tokenize();
    let (symbol_table, lexer_trace) = lexer.into_parts();
    let mut tokens = match lexed {
        Ok(tokens) => tokens,
        Err(err) => {
            let failure = AnalysisFailure::new(err.into(), lexer_trace.into_vec(), Vec::new());
            return Analysis::Failure(Box::new(failure));
        }
    };

    let mut parser = Parser::with_recording(&tokens, config.record_parser_trace).with_vocabulary(vocab);
    let parsed = parser.parse();
    let parser_trace = parser.into_trace().into_vec();

    match parsed {
        Ok(program) => {
            tokens.retain(|t| !t.is_eof());
            Analysis::Success(Box::new(AnalysisSuccess {
                success: true,
                tokens,
                lexer_trace: lexer_trace.into_vec(),
                parser_trace,
                symbol_table,
                ast: ast_to_serializable(&program),
                program,
            }))
        }
        Err(err) => {
            let failure = AnalysisFailure::new(err.into(), lexer_trace.into_vec(), parser_trace);
            Analysis::Failure(Box::new(failure))
        }
    }
}
