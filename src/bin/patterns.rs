use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use design_patterns::console;
use design_patterns::demo::{launch, Demo, RunTarget};

#[derive(Parser, Debug)]
#[command(author, version, about = "Runs the design pattern demos", long_about = None)]
struct Args {
    /// TOML or JSON config file (defaults to $PATTERNS_CONFIG, then built-in defaults).
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase diagnostic logging on stderr (-v info, -vv debug, -vvv trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every demo with its intent.
    List,
    /// Run one demo, or all of them.
    Run {
        /// Demo name, or `all`. Omitting it also runs the whole catalog.
        target: Option<RunTarget>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    match args.command {
        Command::List => {
            console::apply_color(!args.no_color);
            for demo in Demo::ALL {
                println!("{:<16} {}", demo.name().bold(), demo.summary());
            }
            ExitCode::SUCCESS
        }
        Command::Run { target } => launch(
            target.and_then(RunTarget::demo),
            args.config.as_deref(),
            args.verbose,
            args.no_color,
        ),
    }
}
