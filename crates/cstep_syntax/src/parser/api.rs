/// Parse a token list into an AST [`Program`] without recording a trace.
///
/// This is the main public entrypoint for parsing. Use [`Parser::new`] directly to keep the step trace.
///
/// ## Parameters
/// - `tokens`: Token list produced by `cstep_syntax::lexer`, normally ending with `Eof`.
///
/// ## Errors
/// Returns the first [`SyntaxError`].
#[tracing::instrument(skip_all, fields(token_count = tokens.len()))]
pub fn parse(tokens: &[Token]) -> Result<Program, SyntaxError> {
    Parser::with_recording(tokens, false).parse()
}
