//! `anthropic-complete`: command-line host for the completion adapter.
//!
//! Output goes to stdout; logs and errors go to stderr.

mod config;

use anthropic_llm::{LlmClient, LlmError, ToolCompletionInput};
use anyhow::Context;
use clap::{Parser, Subcommand};
use config::HostConfig;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "anthropic-complete",
    version,
    about = "Text and tool completions against the Anthropic Messages API"
)]
struct Cli {
    /// Config file (default: ~/.anthropic-complete/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override a config key; repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    set: Vec<String>,
    /// Messages endpoint override.
    #[arg(long, global = true, env = "ANTHROPIC_ENDPOINT")]
    endpoint: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the supported model catalog as JSON.
    Models,
    /// Run a plain text completion.
    Complete {
        /// Prompt text; read from stdin when omitted.
        prompt: Option<String>,
    },
    /// Run a completion with tool declarations; prints the requested tool calls as JSON.
    Tools {
        /// JSON file holding `{"tools": [...], "messages": [...]}`; stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing()?;

    let cli = Cli::parse();
    let client = match cli.endpoint.as_deref() {
        Some(endpoint) => LlmClient::with_endpoint(endpoint),
        None => LlmClient::new(),
    };

    let output = match cli.command {
        Command::Models => client.models_json().context("list models")?,
        Command::Complete { prompt } => {
            let host = HostConfig::load(cli.config, &cli.set)?;
            let prompt = match prompt {
                Some(p) => p,
                None => read_stdin()?,
            };
            client.completion(&host, &prompt).context("completion")?
        }
        Command::Tools { input } => {
            let host = HostConfig::load(cli.config, &cli.set)?;
            let raw = match input {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("read input {}", path.display()))?,
                None => read_stdin()?,
            };
            let input = parse_tool_input(&raw)?;
            let calls = client
                .completion_with_tools(&host, input)
                .context("tool completion")?;
            serde_json::to_string(&calls).context("encode tool calls")?
        }
    };

    println!("{output}");
    Ok(())
}

fn parse_tool_input(raw: &str) -> Result<ToolCompletionInput, LlmError> {
    serde_json::from_str(raw).map_err(|e| {
        tracing::error!(error = %e, "tool completion input decode failed");
        LlmError::InvalidInput(e.to_string())
    })
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("read stdin")?;
    Ok(buf)
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(v) => v,
        Err(_) => EnvFilter::new("warn,anthropic_complete=debug,anthropic_llm=info"),
    };
    let log_format = std::env::var("ANTHROPIC_COMPLETE_LOG_FORMAT")
        .unwrap_or_else(|_| "compact".to_string())
        .to_ascii_lowercase();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match log_format.as_str() {
        "json" => builder.json().flatten_event(true).init(),
        "pretty" => builder.pretty().init(),
        "compact" => builder.compact().init(),
        other => {
            return Err(anyhow::anyhow!(
                "unsupported ANTHROPIC_COMPLETE_LOG_FORMAT={other:?}; expected one of: json, pretty, compact"
            ));
        }
    }
    Ok(())
}
