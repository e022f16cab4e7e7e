/// Token-stream and trace helpers.
///
/// This chunk contains the low-level primitives used throughout parsing:
/// - Peeking/consuming tokens (`current`, `consume`)
/// - Expecting token kinds, operators and delimiters
/// - Recording trace steps and keeping the routine stack in step with the call nesting
impl<'a> Parser<'a> {
    // ========================================================================
    // Tokens
    // ========================================================================

    /// Return the current token, or `None` once input is exhausted.
    fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).filter(|t| !t.is_eof())
    }

    /// Return `true` if the current token is the given delimiter.
    fn at_delimiter(&self, id: DelimiterId) -> bool {
        self.current().is_some_and(|t| t.is_delimiter(id))
    }

    /// Line of the current token, falling back to the last token (normally `Eof`).
    fn current_line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.position.line)
    }

    /// Consume the current token unconditionally, recording a CONSUME step.
    fn consume(&mut self, token: &'a Token) -> &'a Token {
        self.log(ParseAction::Consume, || format!("Consumed: {token}"), None, None);
        self.pos += 1;
        token
    }

    /// Consume the current token if it has `kind` (and, when given, exactly `value` as its lexeme).
    ///
    /// ## Errors
    /// - `Unexpected end of input` when input is exhausted.
    /// - `Expected KIND, got KIND` on a kind mismatch.
    /// - `Expected 'v', got 'lexeme'` on a value mismatch.
    fn expect(&mut self, kind: TokenKind, value: Option<&str>) -> Result<&'a Token, SyntaxError> {
        let Some(token) = self.current() else {
            return Err(self.end_of_input().with_expected(value.unwrap_or(kind.as_str())));
        };
        if token.kind != kind {
            return Err(SyntaxError::new(
                format!("Expected {kind}, got {}", token.kind),
                token.position.line,
                span_of(token),
            )
            .with_expected(kind.as_str())
            .with_found(token.kind.as_str()));
        }
        if let Some(value) = value {
            if token.lexeme != value {
                return Err(SyntaxError::new(
                    format!("Expected '{value}', got '{}'", token.lexeme),
                    token.position.line,
                    span_of(token),
                )
                .with_expected(value)
                .with_found(token.lexeme.as_str()));
            }
        }
        Ok(self.consume(token))
    }

    fn expect_operator(&mut self, id: OperatorId) -> Result<&'a Token, SyntaxError> {
        self.expect(TokenKind::Operator, Some(operators::as_str(id)))
    }

    fn expect_delimiter(&mut self, id: DelimiterId) -> Result<&'a Token, SyntaxError> {
        let spelling = delimiters::as_char(id).to_string();
        self.expect(TokenKind::Delimiter, Some(&spelling))
    }

    fn end_of_input(&self) -> SyntaxError {
        let offset = self.tokens.last().map_or(0, |t| t.position.offset);
        SyntaxError::new("Unexpected end of input", self.current_line(), (offset, 0usize).into())
            .with_found(TokenKind::Eof.as_str())
    }

    // ========================================================================
    // Trace
    // ========================================================================

    /// Append a step. The message closure only runs while recording.
    fn log(
        &mut self,
        action: ParseAction,
        message: impl FnOnce() -> String,
        routine: Option<Routine>,
        node_created: Option<String>,
    ) {
        if !self.trace.is_recording() {
            return;
        }
        let step = ParserStep {
            action,
            message: message(),
            current_token: self.current().cloned(),
            line: self.current_line(),
            routine,
            stack: self.stack.snapshot(),
            node_created,
        };
        self.trace.push(step);
    }

    /// Enter a grammar routine: push it, then record ROUTINE.
    fn enter(&mut self, routine: Routine, message: &'static str) {
        self.stack.push(routine);
        self.log(ParseAction::Routine, || message.to_string(), Some(routine), None);
    }

    /// Leave a grammar routine: pop it, then record COMPLETE.
    fn leave(&mut self, routine: Routine, message: &'static str, node_created: Option<String>) {
        self.stack.pop(routine);
        self.log(ParseAction::Complete, || message.to_string(), Some(routine), node_created);
    }

    /// Record CREATE_NODE. With `finishing`, the node also completes that routine and pops it.
    fn node_created(&mut self, message: String, summary: String, finishing: Option<Routine>) {
        trace!(node = %summary, "node created");
        if let Some(routine) = finishing {
            self.stack.pop(routine);
        }
        self.log(ParseAction::CreateNode, || message, finishing, Some(summary));
    }

    /// Log a syntax error on its way out. The trace keeps everything recorded so far.
    fn fail(&self, err: SyntaxError) -> SyntaxError {
        debug!(line = err.line, message = %err.message, "syntax error");
        err
    }
}

/// Byte span of a token in the source, quotes included for strings.
fn span_of(token: &Token) -> miette::SourceSpan {
    (token.position.offset, token.source_len()).into()
}
