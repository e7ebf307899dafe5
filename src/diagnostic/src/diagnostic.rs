//! Diagnostic messages.
//!
//! The ultimate purpose of these is to be shown to the programmer at some
//! point. The `Display` implementation dumps plain text; [`emit`][crate::emit]
//! writes the same content with colour.

use std::fmt;

use crate::caret::Caret;

/// A user-facing message describing an issue with some input.
///
/// The builder-style methods consume `self` and return it, since most of the
/// information is known when the [`Diagnostic`] is first created.
#[derive(Debug)]
pub struct Diagnostic {
    /// This is the primary message of the diagnostic.
    message: String,

    /// Where in the input the issue begins.
    ///
    /// Not all issues have a location, for instance "file not found" can't.
    location: Option<Caret>,

    /// Extra lines of context shown under the message.
    notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic message with only a simple description.
    ///
    /// Ideally this text would be sufficient for a familiar user to correct
    /// the issue, when combined with the input name and location.
    pub fn new(message: impl Into<String>) -> Self {
        Diagnostic {
            message: message.into(),
            location: None,
            notes: Vec::new(),
        }
    }

    /// The location where the issue started.
    ///
    /// Giving the issue a concrete starting location makes it easier for
    /// users to navigate their editor to a reasonable place to start
    /// investigating.
    pub fn location(mut self, location: Caret) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a note, an extra line of context shown under the message.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// The main diagnostic message.
    pub fn get_message(&self) -> &str {
        &self.message
    }

    /// Get the location where the issue arose, if it's known.
    pub fn get_location(&self) -> Option<Caret> {
        self.location
    }

    /// View the notes attached to this diagnostic.
    pub fn get_notes(&self) -> &[String] {
        &self.notes
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "error: {}", self.message)?;

        if let Some(location) = self.location {
            write!(f, " at {}", location)?;
        }

        for note in &self.notes {
            write!(f, "\n  note: {}", note)?;
        }

        Ok(())
    }
}
