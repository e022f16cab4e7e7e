//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::path::Path;

use cstep_core::lang::types;
use cstep_core::lang::vocabulary::Vocabulary;
use cstep_syntax::diagnostics::FrontendError;
use cstep_syntax::lexer::Lexer;
use cstep_syntax::parser;
use cstep_syntax::trace::{LexerStep, ParserStep, TraceOptions};
use miette::{NamedSource, Report};

use super::{CliError, CliResult, ExitCode, Stage};
use crate::analyze::{Analysis, analyze_with};
use crate::config::AnalyzeConfig;

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be read (I/O error)
/// - The file exceeds `max_size` bytes
pub fn read_source(path: &Path, max_size: u64) -> CliResult<String> {
    let shown = path.display();
    // Check file size before reading
    let metadata = fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{shown}': {e}")))?;

    if metadata.len() > max_size {
        return Err(CliError::failure(format!(
            "Source file '{shown}' is too large ({} bytes, max {max_size} bytes)",
            metadata.len(),
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{shown}': {e}")))
}

/// Render a front-end error with the offending source highlighted.
pub fn render_error(name: &str, source: &str, err: FrontendError) -> String {
    let report = Report::new(err).with_source_code(NamedSource::new(name, source.to_string()));
    format!("{report:?}")
}

/// Analyze source and print the JSON envelope.
///
/// A lexical or syntax error still prints its (failure) envelope on stdout; the rendered diagnostic goes to stderr
/// and the exit code is 1.
pub fn analyze_source(name: &str, source: &str, config: &AnalyzeConfig) -> CliResult<ExitCode> {
    let analysis = analyze_with(source, config);
    let json = analysis
        .to_json(config.pretty_json)
        .map_err(|e| CliError::failure(format!("Error serializing result: {e}")))?;
    println!("{json}");

    match analysis {
        Analysis::Success(_) => Ok(ExitCode::SUCCESS),
        Analysis::Failure(failure) => {
            eprintln!("{}", render_error(name, source, failure.error));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Print step traces, one event per line.
pub fn trace_source(name: &str, source: &str, config: &AnalyzeConfig, stage: Option<Stage>) -> CliResult<ExitCode> {
    let analysis = analyze_with(source, config);

    if stage != Some(Stage::Parser) {
        for step in analysis.lexer_trace() {
            println!("{}", format_lexer_step(step));
        }
    }
    if stage != Some(Stage::Lexer) {
        for step in analysis.parser_trace() {
            println!("{}", format_parser_step(step));
        }
    }

    match analysis {
        Analysis::Success(_) => Ok(ExitCode::SUCCESS),
        Analysis::Failure(failure) => Err(CliError::failure(render_error(name, source, failure.error))),
    }
}

fn format_lexer_step(step: &LexerStep) -> String {
    let next = step.next_state.map_or("-", |s| s.as_str());
    format!(
        "lex   {:>4}:{:<4} {:<20} {:>10} -> {:<10} {}",
        step.position.line,
        step.position.column,
        step.action.as_str(),
        step.current_state.as_str(),
        next,
        step.message
    )
}

fn format_parser_step(step: &ParserStep) -> String {
    let stack: Vec<&str> = step.stack.iter().map(|r| r.as_str()).collect();
    format!(
        "parse {:>4}      {:<20} [{}] {}",
        step.line,
        step.action.as_str(),
        stack.join(" > "),
        step.message
    )
}

/// Tokenize and display tokens.
pub fn lex_file(path: &Path, config: &AnalyzeConfig) -> CliResult<ExitCode> {
    let source = read_source(path, config.max_source_size)?;
    let name = path.to_string_lossy();
    let tokens = Lexer::with_options(&source, Vocabulary::c(), TraceOptions::disabled())
        .tokenize()
        .map_err(|e| CliError::failure(render_error(&name, &source, e.into())))?;

    for tok in &tokens {
        println!("{tok}");
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse and display AST.
pub fn parse_file(path: &Path, config: &AnalyzeConfig) -> CliResult<ExitCode> {
    let source = read_source(path, config.max_source_size)?;
    let name = path.to_string_lossy();
    let tokens = Lexer::with_options(&source, Vocabulary::c(), TraceOptions::disabled())
        .tokenize()
        .map_err(|e| CliError::failure(render_error(&name, &source, e.into())))?;

    match parser::parse(&tokens) {
        Ok(ast) => {
            println!("{:#?}", ast);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Err(CliError::failure(render_error(&name, &source, e.into()))),
    }
}

/// Lex a file and print its symbol table.
pub fn symbols_file(path: &Path, config: &AnalyzeConfig) -> CliResult<ExitCode> {
    let source = read_source(path, config.max_source_size)?;
    let name = path.to_string_lossy();
    let mut lexer = Lexer::with_options(&source, Vocabulary::c(), TraceOptions::disabled());
    lexer
        .tokenize()
        .map_err(|e| CliError::failure(render_error(&name, &source, e.into())))?;

    for (ident, entry) in lexer.symbols().iter() {
        let ty = entry.declared_type.map_or("-", types::as_str);
        let size = entry.size_in_bytes.map_or_else(|| "-".to_string(), |s| s.to_string());
        println!("{ident:<20} {ty:<8} {size:>4}  line {}", entry.declared_line);
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use cstep_syntax::lexer::lex;

    #[test]
    fn test_read_source_enforces_size_limit() {
        let path = std::env::temp_dir().join(format!("cstep_cli_{}.c", std::process::id()));
        fs::write(&path, "int x = 1;").unwrap();
        assert!(read_source(&path, 1024).is_ok());
        let err = read_source(&path, 4).unwrap_err();
        assert!(err.message.contains("too large"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_read_source_missing_file() {
        let err = read_source(Path::new("/definitely/not/here.c"), 1024).unwrap_err();
        assert!(err.message.contains("Cannot access file"));
        assert_eq!(err.exit_code, ExitCode::FAILURE);
    }

    #[test]
    fn test_render_error_includes_message() {
        let err = lex("x = \"abc").unwrap_err();
        let rendered = render_error("demo.c", "x = \"abc", err.into());
        assert!(rendered.contains("Unterminated string literal"));
    }

    #[test]
    fn test_step_lines() {
        let analysis = analyze_with("x = 1;", &AnalyzeConfig::default());
        let first = format_lexer_step(&analysis.lexer_trace()[0]);
        assert!(first.starts_with("lex"));
        assert!(first.contains("BUILDING_IDENTIFIER"));
        let last = format_parser_step(analysis.parser_trace().last().unwrap());
        assert!(last.contains("COMPLETE"));
        assert!(last.contains("[]"));
    }
}
