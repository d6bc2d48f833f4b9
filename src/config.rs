//! Runtime configuration for ai_worker.
//!
//! There is no configuration file. Values come from command-line flags, then
//! environment variables, then the defaults below.

use crate::cli::Cli;

/// Model used when neither `--model` nor `OLLAMA_MODEL` is set.
pub const DEFAULT_MODEL: &str = "deepseek-r1:1.5b";

/// Ollama host used when neither `--host` nor `OLLAMA_HOST` is set.
pub const DEFAULT_HOST: &str = "http://localhost:11434";

const DEFAULT_PORT: u16 = 11434;

/// Resolved settings for a single invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Model identifier sent with every chat request.
    pub model: String,
    /// Base URL of the Ollama server, normalized.
    pub host: String,
    /// Exit with a distinct status per outcome instead of always 0.
    pub strict_exit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            host: DEFAULT_HOST.to_string(),
            strict_exit: false,
        }
    }
}

impl Config {
    /// Build the configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            model: cli.model.clone(),
            host: normalize_host(&cli.host),
            strict_exit: cli.strict_exit,
        }
    }
}

/// Turn a user-supplied host into a base URL.
///
/// Accepts the same shorthand the Ollama clients do: `localhost`,
/// `example.com:8080`, `https://example.com`, `0.0.0.0`.
pub fn normalize_host(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return DEFAULT_HOST.to_string();
    }

    let (scheme, rest) = match raw.split_once("://") {
        Some((scheme, rest)) => (scheme.to_ascii_lowercase(), rest),
        None => ("http".to_string(), raw),
    };

    // Path component survives normalization, minus the trailing slash.
    let (authority, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], rest[idx..].trim_end_matches('/')),
        None => (rest, ""),
    };

    let (hostname, port) = split_port(authority);
    let hostname = match hostname {
        "" | "0.0.0.0" => "127.0.0.1",
        other => other,
    };
    let port = port.unwrap_or_else(|| if scheme == "https" { 443 } else { DEFAULT_PORT });

    format!("{}://{}:{}{}", scheme, hostname, port, path)
}

/// Split `host[:port]`, keeping bracketed IPv6 literals intact.
fn split_port(authority: &str) -> (&str, Option<u16>) {
    if authority.starts_with('[') {
        return match authority.find(']') {
            Some(end) => {
                let port = authority[end + 1..]
                    .strip_prefix(':')
                    .and_then(|p| p.parse().ok());
                (&authority[..=end], port)
            }
            None => (authority, None),
        };
    }

    match authority.rsplit_once(':') {
        Some((host, port)) => match port.parse() {
            Ok(port) => (host, Some(port)),
            Err(_) => (authority, None),
        },
        None => (authority, None),
    }
}
