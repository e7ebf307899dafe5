//! Statements, and the markers that close blocks.

use crate::{
    ast::Node,
    parser::{Parser, RuleResult},
};

impl Parser<'_> {
    /// Parse one statement, trying each alternative in order. Blank lines
    /// and comment lines before the statement are consumed and discarded.
    ///
    /// `Ok(None)` here means the input ran out, which only the top-level
    /// driver treats as success; the block-body loops treat it as an
    /// unterminated block.
    pub(crate) fn statement(&mut self) -> RuleResult {
        self.skip_empty_lines();

        if self.cursor.is_at_end() {
            return Ok(None);
        }

        let alternatives: &[fn(&mut Self) -> RuleResult] = &[
            Self::let_statement,
            Self::mut_statement,
            Self::assignment,
            Self::end_marker,
            Self::elif_marker,
            Self::else_marker,
            Self::if_clause,
            Self::expression_statement,
            Self::while_loop,
            Self::import_statement,
        ];

        for rule in alternatives {
            if let Some(node) = self.attempt(*rule)? {
                return Ok(Some(node));
            }
        }

        Ok(None)
    }

    /// Consume any run of lines with nothing on them but blanks or a
    /// comment.
    fn skip_empty_lines(&mut self) {
        loop {
            if self.cursor.line_comment() {
                self.cursor.line_end();
            } else if !self.cursor.line_end() {
                return;
            }
        }
    }

    /// An expression in statement position. A terminator after it is
    /// consumed but not required, so a block body like `if a then 1 end`
    /// can sit on a single line.
    fn expression_statement(&mut self) -> RuleResult {
        let node = self.expression()?;
        self.cursor.terminator();
        Ok(Some(node))
    }

    /// The `end` closing a block. Matches the bare keyword only: the line
    /// break after it belongs to whatever statement encloses the block.
    fn end_marker(&mut self) -> RuleResult {
        if self.word("end") {
            Ok(Some(Node::End))
        } else {
            Ok(None)
        }
    }

    fn elif_marker(&mut self) -> RuleResult {
        if self.word("elif") {
            Ok(Some(Node::Elif))
        } else {
            Ok(None)
        }
    }

    fn else_marker(&mut self) -> RuleResult {
        if self.word("else") {
            Ok(Some(Node::Else))
        } else {
            Ok(None)
        }
    }

    /// The grammar for `while` isn't settled, so this never matches.
    fn while_loop(&mut self) -> RuleResult {
        Ok(None)
    }

    /// The grammar for `import` isn't settled, so this never matches.
    fn import_statement(&mut self) -> RuleResult {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Node {
        Parser::new(input).unwrap().parse().unwrap()
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let tree = parse("# a comment\n\n   \n# another\nlet x = 1\n");

        match tree {
            Node::Program(statements) => assert_eq!(statements.len(), 1),
            _ => panic!("expected a program"),
        }
    }

    #[test]
    fn comment_only_input_is_an_empty_program() {
        assert_eq!(parse("# nothing here\n"), Node::Program(Vec::new()));
        assert_eq!(parse("# no trailing newline"), Node::Program(Vec::new()));
    }

    #[test]
    fn expression_statement_without_trailing_newline() {
        let tree = parse("42");
        assert_eq!(tree, Node::Program(vec![Node::Integer(42)]));
    }

    #[test]
    fn trailing_comment_after_statement() {
        let tree = parse("let x = 1 # the answer, eventually\n");
        match tree {
            Node::Program(statements) => assert_eq!(statements.len(), 1),
            _ => panic!("expected a program"),
        }
    }

    #[test]
    fn keywords_do_not_capture_longer_names() {
        // `letter` starts with `let` but is just a name.
        let tree = parse("letter\n");
        assert_eq!(
            tree,
            Node::Program(vec![Node::VarUse("letter".into())])
        );
    }
}
