//! Caret
//!
//! A [`Caret`] is a row and column number in plain text, i.e. where a caret
//! is in the source text.

use std::fmt;

/// A location in some input stream or document.
///
/// Carets are one-indexed, the way editors and compilers present positions
/// to people: `Caret::default()` is row 1, column 1, at the very start of
/// the document.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Caret {
    row: u32,
    col: u32,
}

impl Caret {
    /// Create a new [`Caret`] from a row and column number. These are
    /// 1-indexed.
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// The row the caret is on.
    pub fn row(self) -> u32 {
        self.row
    }

    /// The column of the caret.
    pub fn col(self) -> u32 {
        self.col
    }

    /// Advance a caret over a character. A `\n` moves to the start of the
    /// next row, which works on Windows too since the `\r\n` sequence ends
    /// with the `\n` byte. Control characters other than `\n` don't move the
    /// caret, matching how terminals count columns.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.row += 1;
            self.col = 1;
        } else if !c.is_control() {
            self.col += 1;
        }
    }
}

impl Default for Caret {
    fn default() -> Self {
        Caret { row: 1, col: 1 }
    }
}

impl fmt::Display for Caret {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}
