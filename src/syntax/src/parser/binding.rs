//! `let`, `mut`, and assignment.

use crate::{
    ast::Node,
    parser::{Parser, RuleResult},
};

impl Parser<'_> {
    /// `let name = expression`, an immutable definition.
    ///
    /// The name is required once the keyword has matched, but a missing
    /// `=` backs the whole rule off instead of raising, matching `mut`'s
    /// and assignment's treatment of `let x` as not-a-binding.
    pub(crate) fn let_statement(&mut self) -> RuleResult {
        if !self.word("let") {
            return Ok(None);
        }

        self.cursor.blank_run();
        let name = self.name()?;

        self.cursor.blank_run();
        if !self.cursor.accept_char('=') {
            return Ok(None);
        }

        self.cursor.blank_run();
        let value = self.expression()?;

        self.cursor.blank_run();
        self.require_terminator()?;

        Ok(Some(Node::Let {
            name,
            value: Box::new(value),
        }))
    }

    /// `mut name = expression`, a mutable definition. Unlike `let`, the
    /// `=` is required: nothing else can start with `mut`.
    pub(crate) fn mut_statement(&mut self) -> RuleResult {
        if !self.word("mut") {
            return Ok(None);
        }

        self.cursor.blank_run();
        let name = self.name()?;

        self.cursor.blank_run();
        self.cursor.require_char('=')?;

        self.cursor.blank_run();
        let value = self.expression()?;

        self.cursor.blank_run();
        self.require_terminator()?;

        Ok(Some(Node::Mut {
            name,
            value: Box::new(value),
        }))
    }

    /// `name = expression` or `name op= expression`, for `op` one of the
    /// compound assignment operators.
    ///
    /// Everything up to and including the `=` is speculative. A name
    /// followed by `==` or by an unrecognized operator isn't an
    /// assignment, it's the start of an expression statement.
    pub(crate) fn assignment(&mut self) -> RuleResult {
        let name = match self.cursor.identifier() {
            Some(name) => name,
            None => return Ok(None),
        };

        if Self::is_keyword(&name) {
            return Ok(None);
        }

        self.cursor.blank_run();

        let operator = if self.cursor.accept_char('=') {
            if self.cursor.current() == Some('=') {
                // `==` is a comparison.
                return Ok(None);
            }

            None
        } else {
            let operator = match self.cursor.compound_operator() {
                Some(operator) => operator,
                None => return Ok(None),
            };

            if !Self::is_assignment_operator(&operator)
                || !self.cursor.accept_char('=')
            {
                return Ok(None);
            }

            Some(operator)
        };

        self.cursor.blank_run();
        let value = self.expression()?;

        self.cursor.blank_run();
        self.require_terminator()?;

        Ok(Some(Node::Assignment {
            name,
            operator,
            value: Box::new(value),
        }))
    }
}
