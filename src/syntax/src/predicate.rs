//! Character predicates used by the scanning primitives.
//!
//! The grammar is defined in terms of character classes; keeping them here
//! as named functions means [`Cursor::accept`][crate::Cursor::accept] call
//! sites read like the grammar they implement.

use unicode_xid::UnicodeXID;

/// Horizontal whitespace - a space or a tab, but never a line break.
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Any whitespace, line breaks included.
pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// A decimal digit.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// The first character of an identifier.
pub fn is_name_start(c: char) -> bool {
    c.is_xid_start()
}

/// A character allowed after the first in an identifier. This includes `_`.
pub fn is_name_continue(c: char) -> bool {
    c.is_xid_continue()
}

/// A character that can appear in a symbolic operator like `<<` or `!=`.
pub fn is_operator_char(c: char) -> bool {
    "+-*/<>~=!&|".contains(c)
}

/// A character that can appear in the operator half of a compound
/// assignment like `+=` or `<<=`. Notably this excludes `=` itself, so the
/// scan stops right before the `=` that makes it an assignment.
pub fn is_compound_char(c: char) -> bool {
    "+-*/<>~".contains(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks() {
        assert!(is_blank(' '));
        assert!(is_blank('\t'));
        assert!(!is_blank('\n'));
    }

    #[test]
    fn names() {
        assert!(is_name_start('a'));
        assert!(!is_name_start('_'));
        assert!(!is_name_start('1'));
        assert!(is_name_continue('_'));
        assert!(is_name_continue('1'));
    }

    #[test]
    fn compound_stops_before_equals() {
        assert!(is_compound_char('<'));
        assert!(is_operator_char('='));
        assert!(!is_compound_char('='));
    }
}
