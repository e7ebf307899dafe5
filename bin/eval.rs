//! Parse code taken straight from the command line.

use diagnostic::Diagnostic;

use crate::Args;

/// Parse the command line argument as code
#[derive(clap::Parser)]
pub struct Evaluate {
    /// The code to parse
    input: String,
}

impl Evaluate {
    /// Run the subcommand, parsing its argument.
    pub(crate) fn run(&self, args: &Args) {
        let tree = match syntax::parse(&self.input) {
            Ok(tree) => tree,
            Err(e) => {
                diagnostic::emit_to_stderr("<eval>", &Diagnostic::from(e));
                std::process::exit(1);
            }
        };

        if args.dump {
            println!("{tree}");
        }
    }
}
