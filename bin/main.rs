//! Skiff - a little scripting language, one stage at a time.
//!
//! Right now that stage is the front end: these commands parse input and
//! either report what's wrong with it or show the syntax tree.

mod eval;
mod repl;
mod script;

use std::path::PathBuf;

use clap::Parser;

/// Parse skiff code and inspect the result
#[derive(Parser)]
#[clap(name = "skiff", version, args_conflicts_with_subcommands = true)]
pub struct Args {
    /// A script to check, instead of starting the repl
    filename: Option<PathBuf>,

    /// Print the syntax tree of whatever was parsed
    #[clap(long, global = true)]
    dump: bool,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand)]
enum Command {
    Script(script::Script),
    Eval(eval::Evaluate),
    Repl(repl::ReplArgs),
}

fn main() {
    let args = Args::parse();

    match &args.command {
        Some(Command::Script(script)) => script.run(&args),
        Some(Command::Eval(eval)) => eval.run(&args),
        Some(Command::Repl(repl)) => repl.run(),

        None => match &args.filename {
            Some(filename) => script::Script::new(filename.clone()).run(&args),
            None => repl::ReplArgs.run(),
        },
    }
}
