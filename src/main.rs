mod cli;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity of the program:
    /// -v for info, -vv for debug, and -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate protein-ligand contacts in a single structure file
    Contacts(cli::contacts::Args),
    /// Analyze every model in an extracted prediction results directory
    Report(cli::report::Args),
    /// Summarize per-model confidence metrics of a prediction run
    Confidence(cli::confidence::Args),
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    match &cli.command {
        Command::Contacts(args) => cli::contacts::run(args),
        Command::Report(args) => cli::report::run(args),
        Command::Confidence(args) => cli::confidence::run(args),
    }
}
