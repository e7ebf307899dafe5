//! The cursor - position tracking over source text.
//!
//! A [`Cursor`] owns the scan position: a byte offset, a row/column
//! [`Caret`] for diagnostics, and the lookahead character. Everything the
//! grammar does is built from two moves: [`Cursor::accept`], which consumes
//! the lookahead only when a predicate holds, and [`Cursor::require`], which
//! does the same but raises a positioned [`ParseError`] when it doesn't.
//!
//! Failed speculation is undone with a [`Checkpoint`]: [`Cursor::mark`]
//! before trying an alternative, [`Cursor::reset_to`] if it doesn't pan out.
//! A checkpoint restores the lookahead along with the offset, so restoring
//! is exact - the same characters will be observed again in the same order.

use diagnostic::Caret;

use crate::error::ParseError;

/// A cursor over some source text.
///
/// The lookahead character is loaded eagerly: creating a cursor reads the
/// first character, and every consuming operation loads the next. `None`
/// is the end-of-input sentinel.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The input being consumed.
    input: &'a str,

    /// The byte offset just past the lookahead character.
    offset: usize,

    /// The row and column of the caret, for diagnostics.
    caret: Caret,

    /// The lookahead character, or `None` at end of input.
    current: Option<char>,
}

/// A saved cursor position, produced by [`Cursor::mark`] and consumed by
/// [`Cursor::reset_to`].
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    offset: usize,
    caret: Caret,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over some input, loading the first character.
    ///
    /// Empty input is rejected immediately, positioned at row 1, column 1.
    pub fn new(input: &'a str) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::new(
                "expected a symbol, got empty input",
                Caret::default(),
                "",
                None,
            ));
        }

        let mut cursor = Cursor {
            input,
            offset: 0,
            caret: Caret::default(),
            current: None,
        };

        cursor.advance();
        Ok(cursor)
    }

    /// The lookahead character, or `None` at end of input.
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// Where the cursor is, as a row and column.
    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// Has the cursor consumed all of the input?
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Consume the lookahead if `predicate` holds for it, returning the
    /// consumed character. On a miss (or at end of input) nothing changes.
    ///
    /// This is the only speculative mutating primitive - all grammar-level
    /// backtracking composes out of `accept` misses.
    pub fn accept(&mut self, predicate: impl Fn(char) -> bool) -> Option<char> {
        let c = self.current?;

        if predicate(c) {
            self.advance();
            Some(c)
        } else {
            None
        }
    }

    /// [`Cursor::accept`], for a single expected character.
    pub fn accept_char(&mut self, expected: char) -> bool {
        self.accept(|c| c == expected).is_some()
    }

    /// Like [`Cursor::accept`], but a miss is a fatal [`ParseError`]
    /// carrying `expected`, a human-readable name for what the predicate
    /// recognizes.
    pub fn require(
        &mut self,
        predicate: impl Fn(char) -> bool,
        expected: &str,
    ) -> Result<char, ParseError> {
        match self.accept(predicate) {
            Some(c) => Ok(c),
            None => Err(self.error("unexpected symbol", expected)),
        }
    }

    /// [`Cursor::require`], for a single expected character.
    pub fn require_char(&mut self, expected: char) -> Result<char, ParseError> {
        let name = format!("`{}`", expected);
        self.require(|c| c == expected, &name)
    }

    /// Save the cursor's position so a failed alternative can restore it
    /// with [`Cursor::reset_to`].
    pub fn mark(&self) -> Checkpoint {
        Checkpoint {
            offset: self.offset,
            caret: self.caret,
            current: self.current,
        }
    }

    /// Restore the cursor to a [`Checkpoint`] saved earlier. The lookahead
    /// is restored too, so the restore is exact.
    pub fn reset_to(&mut self, checkpoint: Checkpoint) {
        self.offset = checkpoint.offset;
        self.caret = checkpoint.caret;
        self.current = checkpoint.current;
    }

    /// Build a fatal error at the cursor's position, capturing the
    /// offending lookahead character.
    pub fn error(&self, message: &str, expected: &str) -> ParseError {
        ParseError::new(message, self.caret, expected, self.current)
    }

    /// Load the next character into the lookahead, moving the caret. At the
    /// end of the input this loads the EOF sentinel and is otherwise a
    /// no-op; it never fails.
    fn advance(&mut self) {
        match self.input[self.offset..].chars().next() {
            Some(c) => {
                self.offset += c.len_utf8();
                self.caret.advance(c);
                self.current = Some(c);
            }
            None => self.current = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        let error = Cursor::new("").unwrap_err();
        assert_eq!(error.caret(), Caret::new(1, 1));
    }

    #[test]
    fn loads_first_character() {
        let cursor = Cursor::new("abc").unwrap();
        assert_eq!(cursor.current(), Some('a'));
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn accept_hit_and_miss() {
        let mut cursor = Cursor::new("a1").unwrap();
        assert_eq!(cursor.accept(char::is_alphabetic), Some('a'));
        assert_eq!(cursor.accept(char::is_alphabetic), None);
        assert_eq!(cursor.accept(|c| c.is_ascii_digit()), Some('1'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn accept_at_end() {
        let mut cursor = Cursor::new("a").unwrap();
        assert!(cursor.accept_char('a'));
        assert!(cursor.is_at_end());
        assert_eq!(cursor.accept(|_| true), None);
    }

    #[test]
    fn require_miss_is_positioned() {
        let mut cursor = Cursor::new("ab").unwrap();
        let error = cursor.require(|c| c == 'x', "`x`").unwrap_err();
        assert_eq!(error.expected(), "`x`");
        assert_eq!(error.found(), Some('a'));
    }

    #[test]
    fn caret_tracks_rows_and_columns() {
        let mut cursor = Cursor::new("a\nb").unwrap();
        // The caret counts consumed characters, lookahead included.
        assert_eq!(cursor.caret(), Caret::new(1, 2));
        cursor.accept_char('a');
        assert_eq!(cursor.caret(), Caret::new(2, 1));
        cursor.accept_char('\n');
        assert_eq!(cursor.caret(), Caret::new(2, 2));
    }

    #[test]
    fn reset_is_exact() {
        let mut cursor = Cursor::new("one\ntwo").unwrap();
        cursor.accept_char('o');
        cursor.accept_char('n');

        let checkpoint = cursor.mark();
        let mut first = String::new();
        while let Some(c) = cursor.accept(|_| true) {
            first.push(c);
        }
        assert!(cursor.is_at_end());

        // Restarting at the checkpoint must re-observe the identical
        // character stream.
        cursor.reset_to(checkpoint);
        let mut second = String::new();
        while let Some(c) = cursor.accept(|_| true) {
            second.push(c);
        }

        assert_eq!(first, second);
    }

    #[test]
    fn reset_restores_caret() {
        let mut cursor = Cursor::new("a\nb").unwrap();
        let checkpoint = cursor.mark();
        cursor.accept_char('a');
        cursor.accept_char('\n');
        cursor.reset_to(checkpoint);
        assert_eq!(cursor.caret(), Caret::new(1, 2));
        assert_eq!(cursor.current(), Some('a'));
    }
}
