//! Lexical primitives - the recognizers the grammar rules are built from.
//!
//! Each of these is a predicate loop over [`Cursor::accept`]. None of them
//! raise errors; they either consume what they recognize or report that
//! they couldn't, and it's up to the grammar rule to decide whether that's
//! fatal. The one wrinkle is that a few of them (like [`Cursor::line_comment`])
//! eat leading blanks even on a miss, which the grammar tolerates because
//! every rule skips blanks anyway.
//!
//! With the `trace` cargo feature enabled, recognized units are printed to
//! stderr with the row they finished on.

use crate::{cursor::Cursor, predicate};

impl Cursor<'_> {
    /// Consume a run of horizontal whitespace. True if there was at least
    /// one blank; the cursor is unchanged otherwise.
    pub(crate) fn blank_run(&mut self) -> bool {
        if self.accept(predicate::is_blank).is_none() {
            return false;
        }

        while self.accept(predicate::is_blank).is_some() {}
        true
    }

    /// Consume one or more line endings, each an optional `\r` followed by
    /// a mandatory `\n`. Blank lines are consumed greedily.
    pub(crate) fn line_end(&mut self) -> bool {
        let mut any = false;

        loop {
            let mark = self.mark();
            self.accept_char('\r');

            if self.accept_char('\n') {
                any = true;
            } else {
                self.reset_to(mark);
                return any;
            }
        }
    }

    /// Consume a `#` comment through to the end of the line, along with any
    /// blanks before it. The line ending itself is not consumed. Comments
    /// never reach the tree.
    pub(crate) fn line_comment(&mut self) -> bool {
        self.blank_run();

        if !self.accept_char('#') {
            return false;
        }

        let mut text = String::new();
        while let Some(c) = self.accept(|c| c != '\n') {
            text.push(c);
        }

        self.trace("comment", &text);
        true
    }

    /// The statement terminator: an optional comment, then a line ending.
    /// End of input also terminates, so a final line doesn't need a
    /// trailing newline.
    pub(crate) fn terminator(&mut self) -> bool {
        self.line_comment();
        self.line_end() || self.is_at_end()
    }

    /// Consume a run of decimal digits into `buf`. True if there was at
    /// least one.
    pub(crate) fn digits(&mut self, buf: &mut String) -> bool {
        if let Some(c) = self.accept(predicate::is_digit) {
            buf.push(c);
        } else {
            return false;
        }

        while let Some(c) = self.accept(predicate::is_digit) {
            buf.push(c);
        }

        true
    }

    /// An optional leading `-`, then digits. Like the grammar it serves,
    /// this consumes the `-` even when no digits follow; callers are
    /// expected to be running under a checkpoint.
    pub(crate) fn signed_number(&mut self, buf: &mut String) -> bool {
        if self.accept_char('-') {
            buf.push('-');
        }

        let matched = self.digits(buf);
        if matched {
            self.trace("number", buf);
        }

        matched
    }

    /// An identifier: an XID start character, then XID continue characters
    /// (which include `_` and digits).
    pub(crate) fn identifier(&mut self) -> Option<String> {
        let mut name = String::new();
        name.push(self.accept(predicate::is_name_start)?);

        while let Some(c) = self.accept(predicate::is_name_continue) {
            name.push(c);
        }

        self.trace("ident", &name);
        Some(name)
    }

    /// A type name: `Name`, or `Name -> Name` recursively, with a single
    /// whitespace character on either side of the arrow. A dangling arrow
    /// is rewound, leaving the head name as the result; the enclosing
    /// rule's next requirement reports it.
    pub(crate) fn type_name(&mut self) -> Option<String> {
        let head = self.identifier()?;

        let mark = self.mark();
        if self.accept(predicate::is_space).is_some()
            && self.accept_char('-')
            && self.accept_char('>')
            && self.accept(predicate::is_space).is_some()
        {
            if let Some(rest) = self.type_name() {
                return Some(format!("{} -> {}", head, rest));
            }
        }

        self.reset_to(mark);
        Some(head)
    }

    /// An operator token: a run of symbolic operator characters, or failing
    /// that a bare word (for `and`, `or`, `not`). The caller decides
    /// whether what came back is actually an operator.
    pub(crate) fn operator_token(&mut self) -> Option<String> {
        let mut text = String::new();
        while let Some(c) = self.accept(predicate::is_operator_char) {
            text.push(c);
        }

        if text.is_empty() {
            return self.identifier();
        }

        self.trace("op", &text);
        Some(text)
    }

    /// The operator half of a compound assignment: a run over `+-*/<>~`,
    /// stopping before any `=`.
    pub(crate) fn compound_operator(&mut self) -> Option<String> {
        let mut text = String::new();
        while let Some(c) = self.accept(predicate::is_compound_char) {
            text.push(c);
        }

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    #[cfg(feature = "trace")]
    fn trace(&self, kind: &str, text: &str) {
        eprintln!("{:>4} {:<8} {}", self.caret().row(), kind, text);
    }

    #[cfg(not(feature = "trace"))]
    fn trace(&self, _kind: &str, _text: &str) {}
}
