//! Expressions: operation sequences and the single-expression
//! alternatives they're made of.

use crate::{
    ast::Node,
    error::ParseError,
    parser::{Parser, RuleResult},
};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Operations go first: a single expression is a degenerate operation
    /// sequence, so trying the longer form first is what keeps `1 + 2`
    /// from parsing as just `1`. This can't fail quietly - a position
    /// where an expression is wanted must be filled.
    pub(crate) fn expression(&mut self) -> Result<Node, ParseError> {
        if let Some(node) = self.attempt(Self::operation)? {
            return Ok(node);
        }

        self.single_expression()
    }

    /// A flat operand/operator sequence like `1 + 2 * x`.
    ///
    /// Operands may carry one unary prefix each. The sequence ends at the
    /// first token that isn't a recognized binary operator; that token is
    /// un-consumed. Fewer than two operands isn't a sequence at all, and
    /// the rule backs off so the caller falls through to
    /// [`Parser::single_expression`].
    fn operation(&mut self) -> RuleResult {
        let mut items = Vec::new();
        let mut operands = 0;

        loop {
            self.cursor.blank_run();

            if let Some(prefix) = self.unary_prefix() {
                items.push(Node::Operator(prefix));
                self.cursor.blank_run();
            }

            items.push(self.single_expression()?);
            operands += 1;

            self.cursor.blank_run();
            let mark = self.cursor.mark();

            match self.cursor.operator_token() {
                Some(operator) if Self::is_operator(&operator) => {
                    items.push(Node::Operator(operator));
                }

                Some(_) => {
                    // Not ours - maybe a `then`, maybe an `=`. Put it back.
                    self.cursor.reset_to(mark);
                    break;
                }

                None => break,
            }
        }

        if operands < 2 {
            return Ok(None);
        }

        Ok(Some(Node::OperationsList(items)))
    }

    /// An optional unary prefix: `- ` (the blank is what separates it from
    /// a negative literal), `~`, or the word `not`.
    fn unary_prefix(&mut self) -> Option<String> {
        let mark = self.cursor.mark();
        if self.cursor.accept_char('-') && self.cursor.blank_run() {
            return Some("-".into());
        }
        self.cursor.reset_to(mark);

        if self.cursor.accept_char('~') {
            return Some("~".into());
        }

        if self.word("not") {
            return Some("not".into());
        }

        None
    }

    /// One operand's worth of expression, tried in a fixed order. Floats
    /// go before integers since only the mandatory fractional part tells
    /// them apart, and variable references go nearly last so they don't
    /// shadow calls and field access.
    ///
    /// Running out of alternatives is fatal: there is no way to recover a
    /// position that must hold a value but doesn't.
    pub(crate) fn single_expression(&mut self) -> Result<Node, ParseError> {
        let alternatives: &[fn(&mut Self) -> RuleResult] = &[
            Self::operation_block,
            Self::float,
            Self::integer,
            Self::string,
            Self::boolean,
            Self::function_call,
            Self::field_access,
            Self::variable,
            Self::function_literal,
        ];

        for rule in alternatives {
            if let Some(node) = self.attempt(*rule)? {
                return Ok(node);
            }
        }

        Err(self
            .cursor
            .error("couldn't parse an expression", "a value"))
    }

    /// A parenthesized operation sequence, `(1 + 2)`. The parentheses
    /// aren't general grouping: they only admit a full sequence, so `(5)`
    /// doesn't parse.
    fn operation_block(&mut self) -> RuleResult {
        if !self.cursor.accept_char('(') {
            return Ok(None);
        }

        self.cursor.blank_run();
        let operation = match self.attempt(Self::operation)? {
            Some(node) => node,
            None => return Ok(None),
        };

        self.cursor.blank_run();
        self.cursor.require_char(')')?;

        Ok(Some(operation))
    }
}
