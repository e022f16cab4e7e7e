//! Traced lexer for the cstep C subset.
//!
//! Handles tokenization of:
//! - Keywords and identifiers (building the symbol table as a side effect)
//! - Integer and float literals
//! - Double-quoted strings (single line, no escapes)
//! - One- and two-character operators
//! - Single-character delimiters
//!
//! Every consumed character and every produced token is recorded as a [`LexerStep`] in the lexer's trace.
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token)

pub mod tokens;

pub use tokens::{Token, TokenKind};

use std::sync::Arc;

use cstep_core::lang::types::DeclTypeId;
use cstep_core::lang::vocabulary::{self, Vocabulary};
use tracing::{debug, trace};

use crate::diagnostics::LexicalError;
use crate::stream::{CharStream, Position};
use crate::symbols::SymbolTable;
use crate::trace::{LexAction, LexState, LexerStep, StepTrace, TraceOptions};

// ============================================================================
// LEXER STATE
// ----------------------------------------------------------------------------
// Every token starts and ends in START:
//
// [START] → letter/_ → [IDENTIFIER] ──────────────┐
//         → digit    → [NUMBER] → '.' → [FLOAT] ──┤
//         → '"'      → [STRING] → '"' ────────────┼→ TOKEN_GENERATED → [START]
//         → op char  → [OPERATOR] ────────────────┤
//         → delim    → [DELIMITER] ───────────────┘
// ============================================================================

/// Lexer over one source text.
///
/// Produces tokens on demand ([`Lexer::next_token`]) or all at once ([`Lexer::tokenize`]). The symbol table and
/// trace accumulate across calls and are available after the lexer stops, including after an error.
pub struct Lexer<'a> {
    vocab: &'a Vocabulary,
    stream: CharStream<'a>,
    symbols: SymbolTable,
    trace: StepTrace<LexerStep>,
    symbol_snapshots: bool,
    /// Snapshot of `symbols` reused until the next insertion.
    snapshot: Option<Arc<SymbolTable>>,
    /// Type keyword waiting for the next identifier. Single-use.
    pending_decl_type: Option<DeclTypeId>,
    state: LexState,
    lexeme: String,
    eof_emitted: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer that records a full trace.
    pub fn new(source: &'a str, vocab: &'a Vocabulary) -> Self {
        Self::with_options(source, vocab, TraceOptions::default())
    }

    pub fn with_options(source: &'a str, vocab: &'a Vocabulary, options: TraceOptions) -> Self {
        Self {
            vocab,
            stream: CharStream::new(source),
            symbols: SymbolTable::new(),
            trace: StepTrace::with_recording(options.record),
            symbol_snapshots: options.symbol_snapshots,
            snapshot: None,
            pending_decl_type: None,
            state: LexState::Start,
            lexeme: String::new(),
            eof_emitted: false,
        }
    }

    /// Produce the next token.
    ///
    /// Once input is exhausted this returns the EOF sentinel on every call; the END_OF_INPUT step is recorded only
    /// the first time.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        self.skip_whitespace();

        let start = self.stream.position();
        let Some(c) = self.stream.peek() else {
            return Ok(self.end_of_input(start));
        };

        let token = if vocabulary::is_ident_start(c) {
            self.scan_word(start)
        } else if vocabulary::is_number_digit(c) {
            self.scan_number(start)?
        } else if c == '"' {
            self.scan_string(start)?
        } else if self.vocab.is_operator_start(c) {
            self.scan_operator(start, c)?
        } else if self.vocab.delimiter(c).is_some() {
            self.scan_delimiter(start, c)
        } else {
            let err = LexicalError::spanning(format!("Invalid character '{c}'"), start, c.len_utf8());
            return Err(self.fail(err));
        };

        trace!(kind = %token.kind, lexeme = %token.lexeme, line = token.position.line, "token");
        Ok(token)
    }

    /// Tokenize the remaining input.
    ///
    /// The returned list always ends with exactly one `Eof` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexicalError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.is_eof();
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn trace(&self) -> &StepTrace<LexerStep> {
        &self.trace
    }

    /// Consume the lexer, returning its symbol table and trace.
    pub fn into_parts(self) -> (SymbolTable, StepTrace<LexerStep>) {
        (self.symbols, self.trace)
    }

    // ========================================================================
    // Token scanners
    // ========================================================================

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.stream.peek() {
            if !self.vocab.is_whitespace(c) {
                break;
            }
            self.consume(LexAction::WhitespaceSkip, LexState::Start, false);
        }
    }

    /// Identifier or keyword.
    fn scan_word(&mut self, start: Position) -> Token {
        while self.stream.peek().is_some_and(vocabulary::is_ident_continue) {
            self.consume(LexAction::BuildingIdentifier, LexState::Identifier, true);
        }

        let kind = match self.vocab.keyword(&self.lexeme) {
            Some(kw) => {
                if let Some(ty) = self.vocab.declaration_type(kw) {
                    self.pending_decl_type = Some(ty);
                }
                TokenKind::Keyword
            }
            None => {
                // The pending type is spent on this identifier even if it was already declared.
                let ty = self.pending_decl_type.take();
                if self.symbols.declare(&self.lexeme, ty, start.line) {
                    self.snapshot = None;
                }
                TokenKind::Identifier
            }
        };
        self.emit(kind, start)
    }

    fn scan_number(&mut self, start: Position) -> Result<Token, LexicalError> {
        let mut seen_dot = false;
        while let Some(c) = self.stream.peek() {
            if vocabulary::is_number_digit(c) {
                let state = if seen_dot { LexState::Float } else { LexState::Number };
                self.consume(LexAction::BuildingNumber, state, true);
            } else if c == '.' {
                if seen_dot {
                    let at = self.stream.position();
                    return Err(self.fail(LexicalError::new("Multiple decimal points in number", at)));
                }
                seen_dot = true;
                self.consume(LexAction::DecimalPoint, LexState::Float, true);
            } else {
                break;
            }
        }

        let kind = if seen_dot { TokenKind::Float } else { TokenKind::Integer };
        Ok(self.emit(kind, start))
    }

    /// Double-quoted string. The quotes are not part of the lexeme.
    fn scan_string(&mut self, start: Position) -> Result<Token, LexicalError> {
        self.consume(LexAction::StringStart, LexState::String, false);
        loop {
            match self.stream.peek() {
                Some('"') => {
                    self.consume(LexAction::StringEnd, LexState::String, false);
                    return Ok(self.emit(TokenKind::String, start));
                }
                Some('\n') | None => {
                    let len = self.stream.position().offset - start.offset;
                    let err = LexicalError::spanning("Unterminated string literal", start, len.max(1));
                    return Err(self.fail(err));
                }
                Some(_) => {
                    self.consume(LexAction::BuildingString, LexState::String, true);
                }
            }
        }
    }

    /// Longest match over one or two characters.
    fn scan_operator(&mut self, start: Position, first: char) -> Result<Token, LexicalError> {
        let mut spelling = String::from(first);
        if let Some(second) = self.stream.peek_nth(1) {
            spelling.push(second);
            if self.vocab.operator(&spelling).is_none() {
                spelling.pop();
            }
        }
        if self.vocab.operator(&spelling).is_none() {
            let err = LexicalError::spanning(format!("Invalid character '{first}'"), start, first.len_utf8());
            return Err(self.fail(err));
        }

        for _ in spelling.chars() {
            self.stream.advance();
        }
        Ok(self.single_event_token(LexAction::OperatorFound, LexState::Operator, TokenKind::Operator, spelling, start))
    }

    fn scan_delimiter(&mut self, start: Position, c: char) -> Token {
        self.stream.advance();
        self.single_event_token(LexAction::DelimiterFound, LexState::Delimiter, TokenKind::Delimiter, c.into(), start)
    }

    fn end_of_input(&mut self, at: Position) -> Token {
        if !self.eof_emitted {
            self.eof_emitted = true;
            self.record(LexAction::EndOfInput, None, at, Some(LexState::Start), None);
            debug!(symbols = self.symbols.len(), steps = self.trace.len(), "lexing complete");
        }
        Token::eof(at)
    }

    // ========================================================================
    // Trace helpers
    // ========================================================================

    /// Consume one character, moving to state `into`. `keep` appends it to the lexeme.
    fn consume(&mut self, action: LexAction, into: LexState, keep: bool) {
        let at = self.stream.position();
        let Some(c) = self.stream.advance() else {
            return;
        };
        if keep {
            self.lexeme.push(c);
        }
        self.record(action, Some(c), at, Some(into), None);
        self.state = into;
    }

    /// Finish the lexeme built so far as a token and return to START.
    fn emit(&mut self, kind: TokenKind, start: Position) -> Token {
        let token = Token::new(kind, self.lexeme.clone(), start);
        let at = self.stream.position();
        self.record(LexAction::TokenGenerated, None, at, Some(LexState::Start), Some(&token));
        self.lexeme.clear();
        self.state = LexState::Start;
        token
    }

    /// Operators and delimiters are recognised in one step that also produces the token.
    fn single_event_token(
        &mut self,
        action: LexAction,
        state: LexState,
        kind: TokenKind,
        spelling: String,
        start: Position,
    ) -> Token {
        let first = spelling.chars().next();
        self.state = state;
        self.lexeme.clone_from(&spelling);
        let token = Token::new(kind, spelling, start);
        self.record(action, first, start, Some(LexState::Start), Some(&token));
        self.lexeme.clear();
        self.state = LexState::Start;
        token
    }

    fn record(
        &mut self,
        action: LexAction,
        ch: Option<char>,
        position: Position,
        next_state: Option<LexState>,
        token: Option<&Token>,
    ) {
        if !self.trace.is_recording() {
            return;
        }
        let snapshot = if self.symbol_snapshots { Some(self.current_snapshot()) } else { None };
        let step = LexerStep {
            action,
            message: describe(action, ch, &self.lexeme, token),
            ch,
            position,
            current_state: self.state,
            next_state,
            current_lexeme: self.lexeme.clone(),
            token_generated: token.cloned(),
            symbol_table_snapshot: snapshot,
        };
        self.trace.push(step);
    }

    /// Current symbol table as a shared, immutable snapshot.
    fn current_snapshot(&mut self) -> Arc<SymbolTable> {
        let symbols = &self.symbols;
        Arc::clone(self.snapshot.get_or_insert_with(|| Arc::new(symbols.clone())))
    }

    /// Log a lexical error and reset the in-progress lexeme. The trace keeps everything up to the failure.
    fn fail(&mut self, err: LexicalError) -> LexicalError {
        debug!(line = err.line, column = err.column, message = %err.message, "lexical error");
        self.lexeme.clear();
        self.state = LexState::Start;
        err
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexicalError>;

    /// Yields tokens up to (not including) EOF. Stops after the first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.eof_emitted {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.eof_emitted = true;
                Some(Err(err))
            }
        }
    }
}

fn describe(action: LexAction, ch: Option<char>, lexeme: &str, token: Option<&Token>) -> String {
    let c = ch.map(|c| c.escape_debug().to_string()).unwrap_or_default();
    match action {
        LexAction::WhitespaceSkip => format!("Skipping whitespace '{c}'"),
        LexAction::BuildingIdentifier => format!("Adding '{c}' to identifier '{lexeme}'"),
        LexAction::BuildingNumber => format!("Adding '{c}' to number '{lexeme}'"),
        LexAction::DecimalPoint => format!("Decimal point in '{lexeme}', number is FLOAT"),
        LexAction::StringStart => "Opening quote, reading string".to_string(),
        LexAction::BuildingString => format!("Adding '{c}' to string"),
        LexAction::StringEnd => "Closing quote, string complete".to_string(),
        LexAction::OperatorFound => format!("Operator '{lexeme}'"),
        LexAction::DelimiterFound => format!("Delimiter '{lexeme}'"),
        LexAction::TokenGenerated => match token {
            Some(token) => format!("Generated {token}"),
            None => format!("Generated '{lexeme}'"),
        },
        LexAction::EndOfInput => "End of input".to_string(),
    }
}

/// Tokenize `source` with the standard vocabulary, discarding the trace.
///
/// The returned list ends with the EOF sentinel.
#[tracing::instrument(skip_all, fields(len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, LexicalError> {
    Lexer::with_options(source, Vocabulary::c(), TraceOptions::disabled()).tokenize()
}
