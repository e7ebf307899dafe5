//! An interactive mode.
//!
//! Each line is parsed as a program on its own and its tree is printed
//! back, which makes this a handy way to poke at the grammar.

use diagnostic::Diagnostic;
use rustyline::{error::ReadlineError, Editor};

/// Start an interactive session
#[derive(clap::Parser)]
pub struct ReplArgs; // For now there are no repl settings.

impl ReplArgs {
    /// Run a repl with the given settings.
    pub fn run(&self) {
        let repl = Repl::default();
        repl.start()
    }
}

struct Repl {
    editor: Editor<()>,
}

impl Default for Repl {
    fn default() -> Self {
        let editor = Editor::<()>::new();
        // TODO: Read history here.

        Repl { editor }
    }
}

impl Repl {
    /// The prompt used to ask for more input.
    const PROMPT: &'static str = ">>> ";

    fn start(mut self) {
        loop {
            match self.step() {
                Ok(()) => continue,
                Err(ReplError::Clear) => continue,
                Err(ReplError::Exit) => break,
                Err(ReplError::Readline(e)) => {
                    println!("{}", e);
                    println!("  (press control-d to exit)");
                }
            }
        }
    }

    fn step(&mut self) -> Result<(), ReplError> {
        let input = self.read()?;

        if input.is_empty() {
            return Ok(());
        }

        match syntax::parse(&input) {
            Ok(tree) => println!("{}", tree),
            Err(e) => {
                diagnostic::emit_to_stderr("<repl>", &Diagnostic::from(e))
            }
        }

        Ok(())
    }

    fn read(&mut self) -> Result<String, ReplError> {
        // TODO: We want to have a continuation prompt for input which opens
        //       a block that isn't closed yet.

        let line = self.editor.readline(Repl::PROMPT);
        match line {
            Ok(line) => Ok(line),

            Err(ReadlineError::Interrupted) => {
                // User hit Control-C
                Err(ReplError::Clear)
            }

            Err(ReadlineError::Eof) => {
                // User hit Control-D at end of line, to exit.
                Err(ReplError::Exit)
            }

            Err(e) => Err(ReplError::Readline(e)),
        }
    }
}

#[derive(Debug)]
enum ReplError {
    Clear,
    Exit,

    Readline(ReadlineError),
}

impl std::error::Error for ReplError {}

impl std::fmt::Display for ReplError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplError::Clear => write!(f, "^C"),
            ReplError::Exit => write!(f, "^D"),
            ReplError::Readline(e) => write!(f, "{}", e),
        }
    }
}
