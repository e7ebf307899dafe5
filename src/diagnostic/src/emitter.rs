//! Printing of diagnostic messages to a terminal.

use std::io::{Result, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::Diagnostic;

/// Write a [`Diagnostic`] to some [`WriteColor`] output, typically a
/// [`StandardStream`][termcolor::StandardStream] over stderr.
///
/// The `input_name` is the name of wherever the input came from, shown so
/// the user can tell which file (or prompt) had the issue.
pub fn emit(
    out: &mut dyn WriteColor,
    input_name: &str,
    diagnostic: &Diagnostic,
) -> Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "error")?;
    out.reset()?;

    writeln!(out, ": {}", diagnostic.get_message())?;

    if let Some(location) = diagnostic.get_location() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)))?;
        write!(out, "  --> ")?;
        out.reset()?;
        writeln!(out, "{}:{}", input_name, location)?;
    }

    for note in diagnostic.get_notes() {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "  note")?;
        out.reset()?;
        writeln!(out, ": {}", note)?;
    }

    out.flush()
}

/// [`emit`] to stderr, with color when the environment supports it. Write
/// failures are swallowed - there's nowhere left to report them.
pub fn emit_to_stderr(input_name: &str, diagnostic: &Diagnostic) {
    let mut out = StandardStream::stderr(ColorChoice::Auto);
    let _ = emit(&mut out, input_name, diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Caret;

    #[test]
    fn emit_plain() {
        let diagnostic = Diagnostic::new("something broke")
            .location(Caret::new(3, 7))
            .note("expected `=`");

        let mut buffer = termcolor::Buffer::no_color();
        emit(&mut buffer, "test.sk", &diagnostic).unwrap();

        let text = String::from_utf8(buffer.into_inner()).unwrap();
        assert!(text.contains("error: something broke"));
        assert!(text.contains("test.sk:3:7"));
        assert!(text.contains("note: expected `=`"));
    }
}
