//! Command dispatch
//!
//! Parsing yields a [`Cli`]; a fixed, ordered list of rules then decides what
//! to print. The first rule that matches ends processing. Nothing here
//! terminates the process: the binary turns the returned [`Outcome`] into
//! output and an exit code.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;

use crate::cli::args::Cli;

/// Result of a single invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Write `text` to stdout, then exit with `code`
    Printed { text: String, code: u8 },
    /// Write `text` to stderr, then exit with `code`
    Failed { text: String, code: u8 },
}

impl Outcome {
    fn printed(text: impl Into<String>) -> Self {
        Outcome::Printed {
            text: text.into(),
            code: 0,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Printed { code, .. } | Outcome::Failed { code, .. } => *code,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Outcome::Printed { text, .. } | Outcome::Failed { text, .. } => text,
        }
    }

    /// Write the outcome to the standard streams and return the exit code.
    pub fn emit(self) -> ExitCode {
        let (written, code) = match self {
            Outcome::Printed { text, code } => (writeln!(io::stdout().lock(), "{text}"), code),
            Outcome::Failed { text, code } => (writeln!(io::stderr().lock(), "{text}"), code),
        };

        match written {
            Ok(()) => ExitCode::from(code),
            Err(_) => ExitCode::FAILURE,
        }
    }
}

/// Per-invocation state shared with the rules
pub struct Context {
    help: String,
}

impl Context {
    pub fn new() -> Self {
        let help = Cli::command().render_help().to_string();
        Self {
            help: help.trim_end().to_string(),
        }
    }

    /// Rendered help/usage text
    pub fn help(&self) -> &str {
        &self.help
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

type Rule = fn(&Cli, &Context) -> Option<Outcome>;

/// Evaluated in order; `--version` outranks everything else.
const RULES: &[(&str, Rule)] = &[
    ("version requested", version_requested),
    ("help requested", help_requested),
    ("no subcommand", no_subcommand),
];

fn version_requested(cli: &Cli, _ctx: &Context) -> Option<Outcome> {
    cli.version.then(|| Outcome::printed(crate::get_version(None)))
}

fn help_requested(cli: &Cli, ctx: &Context) -> Option<Outcome> {
    cli.help.then(|| Outcome::printed(ctx.help()))
}

fn no_subcommand(cli: &Cli, ctx: &Context) -> Option<Outcome> {
    cli.command.is_none().then(|| Outcome::printed(ctx.help()))
}

/// Parse `args` (program name first) and decide the outcome.
pub fn dispatch<I, T>(args: I) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => return parse_error(e),
    };
    let ctx = Context::new();

    for (name, rule) in RULES {
        if let Some(outcome) = rule(&cli, &ctx) {
            debug!("Matched rule: {}", name);
            return outcome;
        }
    }

    match cli.command {
        Some(command) => match command {},
        None => Outcome::printed(ctx.help()),
    }
}

fn parse_error(e: clap::Error) -> Outcome {
    let text = e.render().to_string().trim_end().to_string();
    let code = u8::try_from(e.exit_code()).unwrap_or(1);

    if e.use_stderr() {
        Outcome::Failed { text, code }
    } else {
        Outcome::Printed { text, code }
    }
}
