//! Prompt dispatcher.
//!
//! Validates the positional arguments, sends one chat request and prints the
//! reply. Standard output only ever receives the model's reply; every
//! diagnostic goes to standard error. A diagnostic that cannot be written to
//! standard error is dropped: there is nowhere left to report it.

use crate::backend::ChatBackend;
use crate::config::Config;
use crate::protocol::ChatMessage;
use std::io::Write;
use tracing::debug;

/// The only recognized subcommand.
pub const COMMAND: &str = "ollama";

const USAGE: &str = "Usage: ai_worker.py ollama <prompt_text>\n";
const UNKNOWN_COMMAND: &str = "Unknown command. Use: ai_worker.py ollama <prompt_text>\n";

/// How an invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The reply was printed.
    Success,
    /// Fewer than a command and one prompt word.
    UsageError,
    /// The first argument was not `ollama`.
    UnknownCommand,
    /// The backend failed or the reply could not be written.
    BackendFailure,
}

impl Outcome {
    /// Process exit status used with `--strict-exit`.
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::UsageError | Outcome::UnknownCommand => 1,
            Outcome::BackendFailure => 2,
        }
    }
}

/// Dispatch one invocation.
///
/// `args` excludes the program name: the command token followed by the
/// prompt words.
pub async fn run<B, O, E>(
    args: &[String],
    config: &Config,
    backend: &B,
    out: &mut O,
    err: &mut E,
) -> Outcome
where
    B: ChatBackend + ?Sized,
    O: Write,
    E: Write,
{
    if args.len() < 2 {
        return usage(err);
    }

    let command = args[0].to_lowercase();
    if command != COMMAND {
        debug!("Rejected command {:?}", args[0]);
        err.write_all(UNKNOWN_COMMAND.as_bytes()).ok();
        return Outcome::UnknownCommand;
    }

    let prompt = args[1..].join(" ");
    chat_with_model(&prompt, &config.model, backend, out, err).await
}

/// Report a malformed invocation.
pub fn usage<E: Write>(err: &mut E) -> Outcome {
    err.write_all(USAGE.as_bytes()).ok();
    Outcome::UsageError
}

/// Send `prompt` as a single user message to `model` and print the reply.
///
/// Any failure, including a failed write of the reply, is reported on `err`
/// as `Error in ollama_chat: <message>` and nothing reaches `out`.
pub async fn chat_with_model<B, O, E>(
    prompt: &str,
    model: &str,
    backend: &B,
    out: &mut O,
    err: &mut E,
) -> Outcome
where
    B: ChatBackend + ?Sized,
    O: Write,
    E: Write,
{
    let messages = [ChatMessage::user(prompt)];
    debug!("Sending {} byte prompt to {}", prompt.len(), model);

    let result = match backend.chat(model, &messages).await {
        Ok(response) => {
            let mut line = String::with_capacity(response.content().len() + 1);
            line.push_str(response.content());
            line.push('\n');
            out.write_all(line.as_bytes())
                .and_then(|_| out.flush())
                .map_err(|e| e.to_string())
        }
        Err(e) => Err(e.to_string()),
    };

    match result {
        Ok(()) => Outcome::Success,
        Err(message) => {
            writeln!(err, "Error in ollama_chat: {}", message).ok();
            err.flush().ok();
            Outcome::BackendFailure
        }
    }
}
