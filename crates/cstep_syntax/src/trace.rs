//! Step traces recorded by the lexer and parser.
//!
//! A [`StepTrace`] is an append-only list of events. The lexer records [`LexerStep`]s (one per consumed character or
//! produced token) and the parser records [`ParserStep`]s (routine entry/exit, token consumption, node creation).
//! Events are snapshots: a lexer step copies the symbol table as it was at that moment, and a parser step copies the
//! routine stack.
//!
//! Traces survive a failed run, so callers can show how far a stage got before it stopped.

use std::sync::Arc;

use serde::Serialize;

use crate::lexer::Token;
use crate::stream::Position;
use crate::symbols::SymbolTable;

// ============================================================================
// Options
// ============================================================================

/// Controls what a stage records in its trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// Record events at all. When `false` the trace stays empty.
    pub record: bool,
    /// Attach a symbol-table snapshot to every lexer event.
    pub symbol_snapshots: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            record: true,
            symbol_snapshots: true,
        }
    }
}

impl TraceOptions {
    /// Record nothing.
    pub fn disabled() -> Self {
        Self {
            record: false,
            symbol_snapshots: false,
        }
    }
}

// ============================================================================
// StepTrace
// ============================================================================

/// Append-only, ordered event log.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StepTrace<E> {
    events: Vec<E>,
    #[serde(skip)]
    recording: bool,
}

impl<E> StepTrace<E> {
    pub fn new() -> Self {
        Self::with_recording(true)
    }

    pub fn with_recording(recording: bool) -> Self {
        Self {
            events: Vec::new(),
            recording,
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Append an event. Ignored when recording is off.
    pub fn push(&mut self, event: E) {
        if self.recording {
            self.events.push(event);
        }
    }

    pub fn events(&self) -> &[E] {
        &self.events
    }

    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn into_vec(self) -> Vec<E> {
        self.events
    }
}

impl<E> Default for StepTrace<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t, E> IntoIterator for &'t StepTrace<E> {
    type Item = &'t E;
    type IntoIter = std::slice::Iter<'t, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

// ============================================================================
// Lexer events
// ============================================================================

/// Internal lexer state at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LexState {
    Start,
    Identifier,
    Number,
    Float,
    String,
    Operator,
    Delimiter,
}

impl LexState {
    pub fn as_str(self) -> &'static str {
        match self {
            LexState::Start => "START",
            LexState::Identifier => "IDENTIFIER",
            LexState::Number => "NUMBER",
            LexState::Float => "FLOAT",
            LexState::String => "STRING",
            LexState::Operator => "OPERATOR",
            LexState::Delimiter => "DELIMITER",
        }
    }
}

/// What the lexer just did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LexAction {
    WhitespaceSkip,
    BuildingIdentifier,
    BuildingNumber,
    DecimalPoint,
    StringStart,
    BuildingString,
    StringEnd,
    OperatorFound,
    DelimiterFound,
    TokenGenerated,
    EndOfInput,
}

impl LexAction {
    pub fn as_str(self) -> &'static str {
        match self {
            LexAction::WhitespaceSkip => "WHITESPACE_SKIP",
            LexAction::BuildingIdentifier => "BUILDING_IDENTIFIER",
            LexAction::BuildingNumber => "BUILDING_NUMBER",
            LexAction::DecimalPoint => "DECIMAL_POINT",
            LexAction::StringStart => "STRING_START",
            LexAction::BuildingString => "BUILDING_STRING",
            LexAction::StringEnd => "STRING_END",
            LexAction::OperatorFound => "OPERATOR_FOUND",
            LexAction::DelimiterFound => "DELIMITER_FOUND",
            LexAction::TokenGenerated => "TOKEN_GENERATED",
            LexAction::EndOfInput => "END_OF_INPUT",
        }
    }
}

/// One lexer trace event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexerStep {
    pub action: LexAction,
    pub message: String,
    /// Character consumed by this step, if any.
    #[serde(rename = "char")]
    pub ch: Option<char>,
    /// Cursor position before the step consumed anything.
    #[serde(flatten)]
    pub position: Position,
    pub current_state: LexState,
    pub next_state: Option<LexState>,
    pub current_lexeme: String,
    pub token_generated: Option<Token>,
    /// Table as it stood at this step. Steps between two insertions share one snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_table_snapshot: Option<Arc<SymbolTable>>,
}

// ============================================================================
// Parser events
// ============================================================================

/// Grammar production a parser event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Routine {
    #[serde(rename = "parse_program")]
    Program,
    #[serde(rename = "parse_declaration")]
    Declaration,
    #[serde(rename = "parse_identifier_statement")]
    IdentifierStatement,
    #[serde(rename = "parse_function_call")]
    FunctionCall,
    #[serde(rename = "parse_assignment")]
    Assignment,
    #[serde(rename = "parse_expression")]
    Expression,
    #[serde(rename = "parse_additive_expression")]
    AdditiveExpression,
    #[serde(rename = "parse_multiplicative_expression")]
    MultiplicativeExpression,
    #[serde(rename = "parse_primary_expression")]
    PrimaryExpression,
}

impl Routine {
    pub fn as_str(self) -> &'static str {
        match self {
            Routine::Program => "parse_program",
            Routine::Declaration => "parse_declaration",
            Routine::IdentifierStatement => "parse_identifier_statement",
            Routine::FunctionCall => "parse_function_call",
            Routine::Assignment => "parse_assignment",
            Routine::Expression => "parse_expression",
            Routine::AdditiveExpression => "parse_additive_expression",
            Routine::MultiplicativeExpression => "parse_multiplicative_expression",
            Routine::PrimaryExpression => "parse_primary_expression",
        }
    }
}

impl std::fmt::Display for Routine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the parser just did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParseAction {
    Start,
    Check,
    Routine,
    Consume,
    Operator,
    CreateNode,
    Complete,
}

impl ParseAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ParseAction::Start => "START",
            ParseAction::Check => "CHECK",
            ParseAction::Routine => "ROUTINE",
            ParseAction::Consume => "CONSUME",
            ParseAction::Operator => "OPERATOR",
            ParseAction::CreateNode => "CREATE_NODE",
            ParseAction::Complete => "COMPLETE",
        }
    }
}

/// One parser trace event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParserStep {
    pub action: ParseAction,
    pub message: String,
    pub current_token: Option<Token>,
    pub line: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routine: Option<Routine>,
    /// Routine stack after this event was applied, outermost first.
    pub stack: Vec<Routine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_created: Option<String>,
}

/// Stack of active grammar routines, mirroring recursive-descent nesting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutineStack {
    frames: Vec<Routine>,
}

impl RoutineStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, routine: Routine) {
        self.frames.push(routine);
    }

    /// Pop `routine` if it is the innermost frame. Returns `false` (and leaves the stack alone) otherwise.
    pub fn pop(&mut self, routine: Routine) -> bool {
        if self.frames.last() == Some(&routine) {
            self.frames.pop();
            true
        } else {
            false
        }
    }

    pub fn top(&self) -> Option<Routine> {
        self.frames.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn snapshot(&self) -> Vec<Routine> {
        self.frames.clone()
    }
}
