// Parser core type and entrypoint.
//
// This chunk defines the `Parser` type and its top-level `parse()` entrypoint (the `Program` production).
// It is `include!`'d into `crate::parser` like the other chunks.

/// Parser state.
///
/// ## Notes
/// - The parser does not recover: the first mismatch aborts the parse.
/// - The trace and routine stack survive a failed parse, so callers can see where it stopped.
/// - An `Eof` token and the end of the slice both count as "input exhausted".
pub struct Parser<'a> {
    tokens: &'a [Token],
    /// Decides which keywords start a declaration. Should match the lexer's.
    vocab: &'a Vocabulary,
    pos: usize,
    trace: StepTrace<ParserStep>,
    stack: RoutineStack,
}

impl<'a> Parser<'a> {
    /// Create a parser that records a full trace.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_recording(tokens, true)
    }

    pub fn with_recording(tokens: &'a [Token], record: bool) -> Self {
        Self {
            tokens,
            vocab: Vocabulary::c(),
            pos: 0,
            trace: StepTrace::with_recording(record),
            stack: RoutineStack::new(),
        }
    }

    /// Use `vocab` instead of the standard C vocabulary.
    pub fn with_vocabulary(mut self, vocab: &'a Vocabulary) -> Self {
        self.vocab = vocab;
        self
    }

    /// Parse the whole token list into a [`Program`].
    ///
    /// ## Errors
    /// Returns the first [`SyntaxError`]. The partially built tree is dropped.
    pub fn parse(&mut self) -> Result<Program, SyntaxError> {
        self.stack.push(Routine::Program);
        self.log(ParseAction::Start, || "Beginning parsing".to_string(), Some(Routine::Program), None);

        let mut statements = Vec::new();
        while let Some(token) = self.current() {
            let stmt = if token.declaration_type(self.vocab).is_some() {
                self.log(
                    ParseAction::Check,
                    || "Found type keyword".to_string(),
                    Some(Routine::Declaration),
                    None,
                );
                self.declaration()
            } else if token.kind == TokenKind::Identifier {
                self.log(
                    ParseAction::Check,
                    || "Found identifier".to_string(),
                    Some(Routine::IdentifierStatement),
                    None,
                );
                self.identifier_statement()
            } else {
                Err(SyntaxError::new(format!("Unexpected token {}", token.kind), token.position.line, span_of(token))
                    .with_found(token.kind.as_str()))
            };
            match stmt {
                Ok(stmt) => statements.push(stmt),
                Err(err) => return Err(self.fail(err)),
            }
        }

        let program = Program { statements, line: 1 };
        let summary = format!("Program({} statements)", program.statements.len());
        self.leave(Routine::Program, "Parsing completed successfully", Some(summary));
        debug!(statements = program.statements.len(), steps = self.trace.len(), "parsing complete");
        Ok(program)
    }

    pub fn trace(&self) -> &StepTrace<ParserStep> {
        &self.trace
    }

    pub fn into_trace(self) -> StepTrace<ParserStep> {
        self.trace
    }
}
