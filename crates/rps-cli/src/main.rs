// crates/rps-cli/src/main.rs

use clap::{ArgAction, Parser, Subcommand};

mod cmd;
mod io;
mod logging;

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Remove prepended spaces: strip the indentation shared by all lines", long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read text from stdin, write it back with the common indent removed
    Normalize(cmd::normalize::NormalizeArgs),

    /// Report line count and common indent of stdin text
    Check(cmd::check::CheckArgs),

    /// Load the clipboard, strip its common indent, verify, copy back
    Clip(cmd::clip::ClipArgs),

    /// Write stdin to the clipboard as-is (copy a reviewed result back)
    Copy(cmd::copy::CopyArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.cmd {
        Commands::Normalize(args) => cmd::normalize::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Clip(args) => cmd::clip::run(args),
        Commands::Copy(args) => cmd::copy::run(args),
    }
}
