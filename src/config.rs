//! Analysis options.

/// Default limit on source size accepted by the CLI (10 MiB).
pub const DEFAULT_MAX_SOURCE_SIZE: u64 = 10 * 1024 * 1024;

/// Options for [`crate::analyze_with`] and the CLI.
///
/// Turning a trace off only empties that trace; tokens, symbols and the AST are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeConfig {
    /// Record the lexer's step trace
    pub record_lexer_trace: bool,
    /// Record the parser's step trace
    pub record_parser_trace: bool,
    /// Attach a symbol-table snapshot to every lexer step
    pub symbol_snapshots: bool,
    /// Pretty-print JSON output
    pub pretty_json: bool,
    /// Largest source file the CLI will read, in bytes
    pub max_source_size: u64,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            record_lexer_trace: true,
            record_parser_trace: true,
            symbol_snapshots: true,
            pretty_json: true,
            max_source_size: DEFAULT_MAX_SOURCE_SIZE,
        }
    }
}

impl AnalyzeConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lexer_trace(mut self, record: bool) -> Self {
        self.record_lexer_trace = record;
        self
    }

    pub fn with_parser_trace(mut self, record: bool) -> Self {
        self.record_parser_trace = record;
        self
    }

    pub fn with_symbol_snapshots(mut self, snapshots: bool) -> Self {
        self.symbol_snapshots = snapshots;
        self
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Set the maximum source size in bytes
    pub fn with_max_source_size(mut self, bytes: u64) -> Self {
        self.max_source_size = bytes;
        self
    }
}
