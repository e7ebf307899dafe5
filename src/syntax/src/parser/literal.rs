//! Literal expressions: numbers, strings, booleans.

use crate::{
    ast::Node,
    parser::{Parser, RuleResult},
};

impl Parser<'_> {
    /// A float literal. The fractional digits are mandatory, so `42.`
    /// isn't a float (and will leave the `.` behind for some other rule to
    /// trip over).
    pub(crate) fn float(&mut self) -> RuleResult {
        let mut text = String::new();

        if !self.cursor.signed_number(&mut text) {
            return Ok(None);
        }

        if !self.cursor.accept_char('.') {
            return Ok(None);
        }

        text.push('.');
        if !self.cursor.digits(&mut text) {
            return Ok(None);
        }

        match text.parse() {
            Ok(value) => Ok(Some(Node::Float(value))),
            Err(_) => Err(self
                .cursor
                .error("couldn't read this as a float", "a float literal")),
        }
    }

    /// An integer literal, as a signed 64-bit value. Overflow is an error
    /// rather than a wrap or a silent float.
    pub(crate) fn integer(&mut self) -> RuleResult {
        let mut text = String::new();

        if !self.cursor.signed_number(&mut text) {
            return Ok(None);
        }

        match text.parse() {
            Ok(value) => Ok(Some(Node::Integer(value))),
            Err(_) => Err(self.cursor.error(
                "this number doesn't fit in a 64-bit integer",
                "a smaller number",
            )),
        }
    }

    /// A string literal. The contents are taken verbatim - there are no
    /// escape sequences, which also means no way to embed a `"`.
    pub(crate) fn string(&mut self) -> RuleResult {
        if !self.cursor.accept_char('"') {
            return Ok(None);
        }

        let mut value = String::new();
        while let Some(c) = self.cursor.accept(|c| c != '"') {
            value.push(c);
        }

        if !self.cursor.accept_char('"') {
            return Err(self.cursor.error("unterminated string", "`\"`"));
        }

        Ok(Some(Node::String(value)))
    }

    /// `true` or `false`.
    pub(crate) fn boolean(&mut self) -> RuleResult {
        if self.word("true") {
            Ok(Some(Node::Bool(true)))
        } else if self.word("false") {
            Ok(Some(Node::Bool(false)))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_expression(input: &str) -> Node {
        let mut parser = Parser::new(input).unwrap();
        parser.expression().unwrap()
    }

    #[test]
    fn integer() {
        assert_eq!(parse_expression("42\n"), Node::Integer(42));
        assert_eq!(parse_expression("-42\n"), Node::Integer(-42));
    }

    #[test]
    fn float() {
        assert_eq!(parse_expression("42.5\n"), Node::Float(42.5));
        assert_eq!(parse_expression("-0.25\n"), Node::Float(-0.25));
    }

    #[test]
    fn float_needs_fractional_digits() {
        // `42.` parses as the integer and leaves the dot behind, which
        // then fails the whole program.
        assert!(Parser::new("42.\n").unwrap().parse().is_err());
    }

    #[test]
    fn integer_overflow() {
        let mut parser = Parser::new("9223372036854775808\n").unwrap();
        assert!(parser.expression().is_err());
    }

    #[test]
    fn string_is_verbatim() {
        // A backslash-n stays two characters; nothing un-escapes.
        assert_eq!(
            parse_expression("\"a\\nb\"\n"),
            Node::String("a\\nb".into())
        );
    }

    #[test]
    fn string_can_span_lines() {
        assert_eq!(parse_expression("\"a\nb\"\n"), Node::String("a\nb".into()));
    }

    #[test]
    fn unterminated_string() {
        let mut parser = Parser::new("\"oops\n").unwrap();
        assert!(parser.expression().is_err());
    }

    #[test]
    fn booleans() {
        assert_eq!(parse_expression("true\n"), Node::Bool(true));
        assert_eq!(parse_expression("false\n"), Node::Bool(false));
    }

    #[test]
    fn truthy_is_just_a_name() {
        assert_eq!(
            parse_expression("truthy\n"),
            Node::VarUse("truthy".into())
        );
    }
}
