//! Check a file, reporting the first syntax error if there is one.

use std::{fs::File, io::Read, path::PathBuf};

use diagnostic::Diagnostic;

use crate::Args;

/// Parse a file
#[derive(clap::Parser)]
pub struct Script {
    filename: PathBuf,
}

impl Script {
    pub(crate) fn new(filename: PathBuf) -> Script {
        Script { filename }
    }

    /// Parse the file, and print its tree when asked to.
    pub(crate) fn run(&self, args: &Args) {
        let mut input = String::new();

        if let Err(e) = File::open(&self.filename)
            .and_then(|mut file| file.read_to_string(&mut input))
        {
            eprintln!(
                "Error: cannot read '{}': {}",
                &self.filename.display(),
                e
            );
            std::process::exit(1);
        }

        let name = self.filename.display().to_string();

        let tree = match syntax::parse(&input) {
            Ok(tree) => tree,
            Err(e) => {
                diagnostic::emit_to_stderr(&name, &Diagnostic::from(e));
                std::process::exit(1);
            }
        };

        if args.dump {
            println!("{tree}");
        }
    }
}
