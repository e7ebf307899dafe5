//! Function and closure literals.

use crate::{
    ast::Node,
    error::ParseError,
    parser::{Parser, RuleResult},
};

impl Parser<'_> {
    /// `fun (a: T, …) -> T … end`, or with `use` and a leading capture
    /// list, `use (x, y) (a: T, …) -> T … end`.
    ///
    /// The keyword is the commit point and also decides the node: `use`
    /// always builds a closure, even when the capture list is empty.
    pub(crate) fn function_literal(&mut self) -> RuleResult {
        let captures = if self.word("use") {
            self.cursor.blank_run();
            self.cursor.require_char('(')?;
            Some(self.capture_list()?)
        } else if self.word("fun") {
            None
        } else {
            return Ok(None);
        };

        self.cursor.blank_run();
        self.cursor.require_char('(')?;
        let arguments = self.parameter_list()?;

        self.cursor.blank_run();
        self.cursor.require_char('-')?;
        self.cursor.require_char('>')?;

        self.cursor.blank_run();
        let return_type = match self.cursor.type_name() {
            Some(name) => name,
            None => {
                return Err(self
                    .cursor
                    .error("expected a return type", "a type name"))
            }
        };

        self.cursor.blank_run();
        self.require_terminator()?;

        let body = self.function_body()?;

        Ok(Some(match captures {
            Some(captures) => Node::Closure {
                captures,
                arguments,
                return_type,
                body,
            },
            None => Node::Function {
                arguments,
                return_type,
                body,
            },
        }))
    }

    /// The names captured by a closure, after the opening `(` and through
    /// the closing `)`.
    fn capture_list(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut captures = Vec::new();

        self.cursor.blank_run();
        if self.cursor.accept_char(')') {
            return Ok(captures);
        }

        loop {
            self.cursor.blank_run();
            captures.push(Node::Capture(self.name()?));

            self.cursor.blank_run();
            if self.cursor.accept_char(',') {
                continue;
            }

            self.cursor.require_char(')')?;
            return Ok(captures);
        }
    }

    /// `name: Type` pairs, after the opening `(` and through the closing
    /// `)`.
    fn parameter_list(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut arguments = Vec::new();

        self.cursor.blank_run();
        if self.cursor.accept_char(')') {
            return Ok(arguments);
        }

        loop {
            self.cursor.blank_run();
            let name = self.name()?;

            self.cursor.blank_run();
            self.cursor.require_char(':')?;

            self.cursor.blank_run();
            let type_name = match self.cursor.type_name() {
                Some(name) => name,
                None => {
                    return Err(self
                        .cursor
                        .error("expected the argument's type", "a type name"))
                }
            };

            arguments.push(Node::Argument { name, type_name });

            self.cursor.blank_run();
            if self.cursor.accept_char(',') {
                continue;
            }

            self.cursor.require_char(')')?;
            return Ok(arguments);
        }
    }

    /// Statements up to the `end` that closes the body. The marker is
    /// consumed and discarded.
    fn function_body(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut body = Vec::new();

        loop {
            match self.statement()? {
                Some(Node::End) => return Ok(body),

                Some(node) if node.is_marker() => {
                    return Err(self.cursor.error(
                        "this keyword doesn't belong in a function body",
                        "`end`",
                    ));
                }

                Some(node) => body.push(node),

                None => {
                    return Err(self
                        .cursor
                        .error("unterminated function body", "`end`"));
                }
            }
        }
    }
}
