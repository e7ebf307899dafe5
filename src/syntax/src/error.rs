//! Parse errors
//!
//! There is exactly one kind of error the parser produces: a rule committed
//! to an interpretation of the input and then couldn't complete it. These
//! carry everything needed to point the user at the problem. Rules which
//! merely fail to match don't produce an error at all, they back off
//! silently - see [`Parser`][crate::Parser] for how that distinction works.

use std::{error, fmt};

use diagnostic::{Caret, Diagnostic};

/// A fatal parse error, positioned in the input.
///
/// Raising one of these aborts the whole parse. There's no recovery and no
/// partial tree: the first error ends parsing.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// What went wrong, in words.
    message: String,

    /// Where the cursor was when the rule gave up.
    caret: Caret,

    /// A human-readable description of what was expected instead.
    expected: String,

    /// The offending character, or `None` at end of input.
    found: Option<char>,
}

impl ParseError {
    /// Create a new error. `found` is the character the cursor was looking
    /// at, with `None` standing in for end of input.
    pub fn new(
        message: impl Into<String>,
        caret: Caret,
        expected: impl Into<String>,
        found: Option<char>,
    ) -> Self {
        ParseError {
            message: message.into(),
            caret,
            expected: expected.into(),
            found,
        }
    }

    /// What went wrong.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The row and column where the error was raised.
    pub fn caret(&self) -> Caret {
        self.caret
    }

    /// What the failing rule was expecting to see.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The character the cursor was looking at, if there was one.
    pub fn found(&self) -> Option<char> {
        self.found
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.caret, self.message)?;

        if !self.expected.is_empty() {
            write!(f, ", expected {}", self.expected)?;
        }

        match self.found {
            Some(c) => write!(f, ", found {:?}", c),
            None => write!(f, ", found end of input"),
        }
    }
}

impl error::Error for ParseError {}

impl From<ParseError> for Diagnostic {
    fn from(e: ParseError) -> Self {
        let mut diagnostic =
            Diagnostic::new(e.message.clone()).location(e.caret);

        if !e.expected.is_empty() {
            diagnostic = diagnostic.note(format!("expected {}", e.expected));
        }

        diagnostic = match e.found {
            Some(c) => diagnostic.note(format!("found {:?}", c)),
            None => diagnostic.note("found end of input"),
        };

        diagnostic
    }
}
