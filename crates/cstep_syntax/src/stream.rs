//! Character stream with line/column tracking.
//!
//! [`CharStream`] owns the read cursor over the source text. It never fails: reading past the end yields `None`.

use serde::Serialize;

/// A point in the source text.
///
/// `line` and `column` are 1-based and count characters; `offset` is the byte offset into the source and is used
/// only for diagnostics rendering, so it is not serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    #[serde(skip)]
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Cursor over source text.
#[derive(Debug, Clone)]
pub struct CharStream<'a> {
    source: &'a str,
    position: Position,
}

impl<'a> CharStream<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: Position::default(),
        }
    }

    /// Return the current character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Return the character `n` places ahead of the cursor (`peek_nth(0) == peek()`).
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consume one character, updating the position.
    ///
    /// A newline moves to column 1 of the next line; anything else advances the column.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position.offset += c.len_utf8();
        if c == '\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(c)
    }

    pub fn is_end(&self) -> bool {
        self.position.offset >= self.source.len()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    fn rest(&self) -> &'a str {
        &self.source[self.position.offset..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_tracks_lines_and_columns() {
        let mut s = CharStream::new("ab\nc");
        assert_eq!(s.position(), Position::default());
        assert_eq!(s.advance(), Some('a'));
        assert_eq!(s.advance(), Some('b'));
        assert_eq!((s.position().line, s.position().column), (1, 3));
        assert_eq!(s.advance(), Some('\n'));
        assert_eq!((s.position().line, s.position().column), (2, 1));
        assert_eq!(s.advance(), Some('c'));
        assert!(s.is_end());
        assert_eq!(s.advance(), None);
        assert_eq!(s.peek(), None);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let s = CharStream::new("xy");
        assert_eq!(s.peek(), Some('x'));
        assert_eq!(s.peek_nth(1), Some('y'));
        assert_eq!(s.peek_nth(2), None);
        assert_eq!(s.position().offset, 0);
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut s = CharStream::new("é;");
        s.advance();
        assert_eq!(s.position().offset, 2);
        assert_eq!(s.position().column, 2);
        assert_eq!(s.peek(), Some(';'));
    }
}
