//! Calls, field access, and variable references.

use crate::{
    ast::Node,
    error::ParseError,
    parser::{Parser, RuleResult},
};

impl Parser<'_> {
    /// `name(arg, …)`. The name can't be a keyword - without that check,
    /// `fun (…)` would commit here as a call to a function named `fun`
    /// and the real function-literal rule would never run.
    pub(crate) fn function_call(&mut self) -> RuleResult {
        let name = match self.cursor.identifier() {
            Some(name) => name,
            None => return Ok(None),
        };

        if Self::is_keyword(&name) {
            return Ok(None);
        }

        if !self.cursor.accept_char('(') {
            return Ok(None);
        }

        let arguments = self.call_arguments()?;

        Ok(Some(Node::FunctionCall { name, arguments }))
    }

    /// `object.field` or `object.field(arg, …)`. The dot is the commit
    /// point; whether it's a read or a call depends on whether a
    /// parenthesized argument list follows.
    pub(crate) fn field_access(&mut self) -> RuleResult {
        let object = match self.cursor.identifier() {
            Some(name) => name,
            None => return Ok(None),
        };

        if Self::is_keyword(&object) {
            return Ok(None);
        }

        if !self.cursor.accept_char('.') {
            return Ok(None);
        }

        let field = self.name()?;

        if self.cursor.accept_char('(') {
            let arguments = self.call_arguments()?;
            Ok(Some(Node::ClosureFieldCall {
                object,
                field,
                arguments,
            }))
        } else {
            Ok(Some(Node::ClosureFieldRead { object, field }))
        }
    }

    /// A plain variable reference. Tried after calls and field access so
    /// it can't shadow them, and never a keyword.
    pub(crate) fn variable(&mut self) -> RuleResult {
        match self.cursor.identifier() {
            Some(name) if !Self::is_keyword(&name) => {
                Ok(Some(Node::VarUse(name)))
            }
            _ => Ok(None),
        }
    }

    /// A comma-separated expression list, starting just after the opening
    /// `(` and consuming through the closing `)`.
    pub(crate) fn call_arguments(&mut self) -> Result<Vec<Node>, ParseError> {
        let mut arguments = Vec::new();

        self.cursor.blank_run();
        if self.cursor.accept_char(')') {
            return Ok(arguments);
        }

        loop {
            self.cursor.blank_run();
            arguments.push(self.expression()?);

            self.cursor.blank_run();
            if self.cursor.accept_char(',') {
                continue;
            }

            self.cursor.require_char(')')?;
            return Ok(arguments);
        }
    }
}
