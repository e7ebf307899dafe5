//! The grammar parser.
//!
//! Each grammar rule is a method on [`Parser`] returning a [`RuleResult`],
//! which has three states:
//!
//! - `Ok(Some(node))` - the rule matched and consumed its input;
//! - `Ok(None)` - the rule didn't match, and the caller should back the
//!   cursor off and try something else;
//! - `Err(error)` - the rule committed to an interpretation (it consumed a
//!   defining keyword or delimiter) and then couldn't finish. This is a
//!   real syntax error and propagates all the way out, with no rewinding.
//!
//! The line between the last two is the load-bearing part of every rule:
//! moving it earlier silently picks the wrong alternative, moving it later
//! buries the real error under a worse one from a sibling rule.
//!
//! [`Parser::attempt`] runs a rule and rewinds the cursor on `Ok(None)`,
//! so rules don't have to clean up after their own speculation.
//!
//! The rules themselves are spread over the files in this directory, one
//! grammar area per file, as one big `impl Parser`.

mod binding;
mod call;
mod conditional;
mod expression;
mod function;
mod literal;
mod statement;

use crate::{ast::Node, cursor::Cursor, error::ParseError, predicate};

/// What a grammar rule produces: a match, a silent no-match, or a fatal
/// error.
pub(crate) type RuleResult<T = Node> = Result<Option<T>, ParseError>;

/// Reserved words. None of these can be a variable, function, or field
/// name.
const KEYWORDS: &[&str] = &[
    "let", "mut", "fun", "use", "ret", "end", "if", "then", "elif", "else",
    "while", "do", "import",
];

/// The binary operators allowed in an operations list.
const OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "<<", ">>", "~", "and", "or", "not", "==", "!=", "<",
    ">", "<=", ">=",
];

/// The operators that can combine with `=` in a compound assignment.
const ASSIGNMENT_OPERATORS: &[&str] = &["+", "-", "*", "/", "<<", ">>", "~"];

/// A parser over some source text.
///
/// A parser is consumed by [`Parser::parse`], which produces either a
/// [`Node::Program`] or the first fatal [`ParseError`].
#[derive(Debug)]
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a parser over some input.
    ///
    /// This fails on empty input, which is an error rather than an empty
    /// program.
    pub fn new(input: &'a str) -> Result<Parser<'a>, ParseError> {
        Ok(Parser {
            cursor: Cursor::new(input)?,
        })
    }

    /// Parse the input as a sequence of statements.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        let mut statements = Vec::new();

        loop {
            match self.statement()? {
                Some(node) if node.is_marker() => {
                    return Err(self
                        .cursor
                        .error("this keyword closes a block, and there's no open block here", "a statement"));
                }

                Some(node) => statements.push(node),

                None => break,
            }
        }

        if !self.cursor.is_at_end() {
            return Err(self.cursor.error("couldn't make sense of this statement", "a statement"));
        }

        Ok(Node::Program(statements))
    }

    /// Run a rule, rewinding the cursor if it reports a no-match. Fatal
    /// errors pass through with the cursor left where the rule stopped,
    /// which is where the error points.
    pub(crate) fn attempt<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> RuleResult<T>,
    ) -> RuleResult<T> {
        let mark = self.cursor.mark();
        let result = rule(self);

        if let Ok(None) = result {
            self.cursor.reset_to(mark);
        }

        result
    }

    /// Match a bare word like `let` or `true`. The word only matches at a
    /// name boundary: `letx` is an identifier, not `let` followed by `x`.
    /// On a miss the cursor is rewound and this returns false.
    pub(crate) fn word(&mut self, word: &str) -> bool {
        let mark = self.cursor.mark();

        for c in word.chars() {
            if !self.cursor.accept_char(c) {
                self.cursor.reset_to(mark);
                return false;
            }
        }

        if let Some(c) = self.cursor.current() {
            if predicate::is_name_continue(c) {
                self.cursor.reset_to(mark);
                return false;
            }
        }

        true
    }

    /// An identifier where one is required, after a rule has committed.
    pub(crate) fn name(&mut self) -> Result<String, ParseError> {
        match self.cursor.identifier() {
            Some(name) => Ok(name),
            None => Err(self.cursor.error("expected a name", "an identifier")),
        }
    }

    /// A statement terminator where one is required.
    pub(crate) fn require_terminator(&mut self) -> Result<(), ParseError> {
        if self.cursor.terminator() {
            Ok(())
        } else {
            Err(self
                .cursor
                .error("expected the statement to end", "a line break"))
        }
    }

    pub(crate) fn is_keyword(word: &str) -> bool {
        KEYWORDS.contains(&word)
    }

    pub(crate) fn is_operator(word: &str) -> bool {
        OPERATORS.contains(&word)
    }

    pub(crate) fn is_assignment_operator(word: &str) -> bool {
        ASSIGNMENT_OPERATORS.contains(&word)
    }
}
