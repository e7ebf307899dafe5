//! `if` / `elif` / `else` clauses.

use crate::{
    ast::Node,
    error::ParseError,
    parser::{Parser, RuleResult},
};

/// Which marker ended a clause body.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum BodyEnd {
    End,
    Elif,
    Else,
}

impl Parser<'_> {
    /// `if c then … elif c then … else … end`.
    ///
    /// Each `elif` group becomes its own [`Node::IfClause`] (with nothing
    /// in its own elif and else slots) in the head clause's elif list, and
    /// the else body attaches directly. The simplest form is just
    /// `if c then … end`, with both lists empty.
    pub(crate) fn if_clause(&mut self) -> RuleResult {
        if !self.word("if") {
            return Ok(None);
        }

        self.cursor.blank_run();
        let condition = self.expression()?;
        self.then_keyword()?;

        let (body, mut stop) = self.clause_body()?;

        let mut elifs = Vec::new();
        let mut else_body = Vec::new();

        while stop == BodyEnd::Elif {
            self.cursor.blank_run();
            let elif_condition = self.expression()?;
            self.then_keyword()?;

            let (elif_body, next) = self.clause_body()?;
            elifs.push(Node::IfClause {
                condition: Box::new(elif_condition),
                body: elif_body,
                elifs: Vec::new(),
                else_body: Vec::new(),
            });

            stop = next;
        }

        if stop == BodyEnd::Else {
            let (final_body, next) = self.clause_body()?;

            if next != BodyEnd::End {
                return Err(self.cursor.error(
                    "an `else` body can only be closed with `end`",
                    "`end`",
                ));
            }

            else_body = final_body;
        }

        Ok(Some(Node::IfClause {
            condition: Box::new(condition),
            body,
            elifs,
            else_body,
        }))
    }

    /// The `then` between a condition and its body. By this point the
    /// clause is committed, so a missing `then` is fatal.
    fn then_keyword(&mut self) -> Result<(), ParseError> {
        self.cursor.blank_run();

        if self.word("then") {
            Ok(())
        } else {
            Err(self
                .cursor
                .error("expected `then` after the condition", "`then`"))
        }
    }

    /// Statements up to the marker that ends this clause. All three
    /// markers are legal stops here; the caller decides what a given
    /// marker means for the clause as a whole.
    fn clause_body(&mut self) -> Result<(Vec<Node>, BodyEnd), ParseError> {
        let mut body = Vec::new();

        loop {
            match self.statement()? {
                Some(Node::End) => return Ok((body, BodyEnd::End)),
                Some(Node::Elif) => return Ok((body, BodyEnd::Elif)),
                Some(Node::Else) => return Ok((body, BodyEnd::Else)),

                Some(node) => body.push(node),

                None => {
                    return Err(self
                        .cursor
                        .error("unterminated `if` clause", "`end`"));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Node {
        Parser::new(input).unwrap().parse().unwrap()
    }

    fn single_statement(input: &str) -> Node {
        match parse(input) {
            Node::Program(mut statements) => {
                assert_eq!(statements.len(), 1);
                statements.pop().unwrap()
            }
            _ => panic!("expected a program"),
        }
    }

    #[test]
    fn simplest_if() {
        let node = single_statement("if a then 1 end\n");
        assert_eq!(
            node,
            Node::IfClause {
                condition: Box::new(Node::VarUse("a".into())),
                body: vec![Node::Integer(1)],
                elifs: Vec::new(),
                else_body: Vec::new(),
            }
        );
    }

    #[test]
    fn if_elif_else_on_one_line() {
        let node = single_statement("if a then 1 elif b then 2 else 3 end\n");
        assert_eq!(
            node,
            Node::IfClause {
                condition: Box::new(Node::VarUse("a".into())),
                body: vec![Node::Integer(1)],
                elifs: vec![Node::IfClause {
                    condition: Box::new(Node::VarUse("b".into())),
                    body: vec![Node::Integer(2)],
                    elifs: Vec::new(),
                    else_body: Vec::new(),
                }],
                else_body: vec![Node::Integer(3)],
            }
        );
    }

    #[test]
    fn multi_line_if() {
        let node = single_statement(
            "if x < 2 then\n    f(x)\nelse\n    g(x)\nend\n",
        );

        match node {
            Node::IfClause {
                body, else_body, ..
            } => {
                assert_eq!(body.len(), 1);
                assert_eq!(else_body.len(), 1);
            }
            _ => panic!("expected an if clause"),
        }
    }

    #[test]
    fn several_elifs() {
        let node = single_statement(
            "if a then 1 elif b then 2 elif c then 3 end\n",
        );

        match node {
            Node::IfClause {
                elifs, else_body, ..
            } => {
                assert_eq!(elifs.len(), 2);
                assert!(else_body.is_empty());
            }
            _ => panic!("expected an if clause"),
        }
    }

    #[test]
    fn missing_then_is_fatal() {
        assert!(Parser::new("if a 1 end\n").unwrap().parse().is_err());
    }

    #[test]
    fn missing_end_is_fatal() {
        assert!(Parser::new("if a then 1\n").unwrap().parse().is_err());
    }

    #[test]
    fn elif_after_else_is_fatal() {
        let input = "if a then 1 else 2 elif b then 3 end\n";
        assert!(Parser::new(input).unwrap().parse().is_err());
    }
}
