use clap::{ArgAction, Parser, Subcommand};

/// Argument definitions.
///
/// clap's built-in `--help`/`--version` handling is disabled so the dispatcher
/// decides precedence between them.
#[derive(Parser, Debug)]
#[command(
    name = "chatboteval",
    about = "chatboteval command-line interface",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Print the installed chatboteval version and exit.
    #[arg(long, action = ArgAction::SetTrue)]
    pub version: bool,

    /// Show this message and exit.
    #[arg(long, action = ArgAction::SetTrue)]
    pub help: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    // Future subcommands will be added here
}
