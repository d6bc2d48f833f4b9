//! Command-line surface.
//!
//! Only the worker's own options in front of the command token go through
//! clap. The command token and everything after it, `--` and flag-like words
//! included, are kept verbatim; the dispatcher decides what is valid so its
//! diagnostics stay byte-exact.

use crate::config::{DEFAULT_HOST, DEFAULT_MODEL};
use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "ai_worker")]
#[command(about = "Send a prompt to a local Ollama model and print the reply")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Model to chat with
    #[arg(long, value_name = "MODEL", env = "OLLAMA_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Ollama server address
    #[arg(long, value_name = "URL", env = "OLLAMA_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Exit non-zero on usage errors (1) and backend failures (2)
    #[arg(long)]
    pub strict_exit: bool,

    /// Command token followed by the prompt words, unparsed
    #[arg(skip)]
    pub args: Vec<String>,
}

impl Cli {
    /// Parse a full argument vector, program name first.
    pub fn from_argv<I, T>(argv: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut argv = argv
            .into_iter()
            .map(|arg| arg.into().to_string_lossy().into_owned());
        let program = argv.next().unwrap_or_else(|| "ai_worker".to_string());
        let rest: Vec<String> = argv.collect();

        let split = leading_options_len(&rest);
        let mut cli = Cli::try_parse_from(std::iter::once(program).chain(rest[..split].iter().cloned()))?;
        cli.args = rest[split..].to_vec();
        Ok(cli)
    }

    /// Positional arguments in invocation order: the command token followed
    /// by every prompt word.
    pub fn dispatch_args(&self) -> &[String] {
        &self.args
    }
}

/// Number of leading tokens that are the worker's own options.
///
/// Stops at the first token that is not a known option, or at a value-taking
/// option with no value after it; that token is then handed to the
/// dispatcher like any other.
fn leading_options_len(args: &[String]) -> usize {
    let mut i = 0;
    while let Some(arg) = args.get(i) {
        match arg.as_str() {
            "--strict-exit" => i += 1,
            "--model" | "--host" if i + 1 < args.len() => i += 2,
            other if other.starts_with("--model=") || other.starts_with("--host=") => i += 1,
            _ => break,
        }
    }
    i
}
