//! relay-preflight: verifies the relay's environment before it is started.
//!
//! Usage:
//!   relay-preflight                 Check the .env file and provider key
//!   relay-preflight --launch        Check, then run the relay and exit with its status
//!
//! Exits non-zero when the .env file is absent (a template is written), when
//! the provider key is unset or still the placeholder, when the relay binary
//! cannot be found, or when the launched relay exits unsuccessfully.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};

const OPENAI_PLACEHOLDER: &str = "your_openai_api_key_here";
const HF_PLACEHOLDER: &str = "your_huggingface_api_key_here";

const ENV_TEMPLATE: &str = "# Completion provider: openai or huggingface
COMPLETION_PROVIDER=openai

# OpenAI API Configuration
OPENAI_API_KEY=your_openai_api_key_here

# Hugging Face Inference API (used by /ask and the huggingface provider)
HF_API_KEY=your_huggingface_api_key_here

# Relay listen port
PORT=8000
";

#[derive(Parser)]
#[command(name = "relay-preflight", version, about, long_about = None)]
struct Cli {
    /// Path of the environment file to check
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Start the relay after the checks pass
    #[arg(long)]
    launch: bool,

    /// Relay binary to launch (default: `relay` next to this executable)
    #[arg(long)]
    relay_bin: Option<PathBuf>,
}

/// Outcome of checking the environment file.
#[derive(Debug, PartialEq, Eq)]
enum EnvCheck {
    Ready { provider: String },
    TemplateCreated,
    MissingKey { variable: &'static str },
}

fn check_env_file(path: &Path) -> Result<EnvCheck> {
    check_env_file_with(path, |key| std::env::var(key).ok())
}

/// Checks `path` with `process_env` consulted before the file's own values.
fn check_env_file_with<F>(path: &Path, process_env: F) -> Result<EnvCheck>
where
    F: Fn(&str) -> Option<String>,
{
    if !path.exists() {
        std::fs::write(path, ENV_TEMPLATE)
            .with_context(|| format!("Failed to write template to {}", path.display()))?;
        return Ok(EnvCheck::TemplateCreated);
    }

    let vars: Vec<(String, String)> = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to read {}", path.display()))?
        .collect::<Result<_, _>>()
        .with_context(|| format!("Malformed line in {}", path.display()))?;
    let lookup = |key: &str| {
        process_env(key)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| vars.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()))
            .filter(|v| !v.trim().is_empty())
    };

    let provider = lookup("COMPLETION_PROVIDER")
        .unwrap_or_else(|| "openai".to_string())
        .to_lowercase();
    let (variable, placeholder) = match provider.as_str() {
        "huggingface" | "hf" => ("HF_API_KEY", HF_PLACEHOLDER),
        _ => ("OPENAI_API_KEY", OPENAI_PLACEHOLDER),
    };

    match lookup(variable) {
        Some(key) if key != placeholder => Ok(EnvCheck::Ready { provider }),
        _ => Ok(EnvCheck::MissingKey { variable }),
    }
}

fn default_relay_bin() -> Result<PathBuf> {
    let current = std::env::current_exe().context("Cannot locate current executable")?;
    let dir = current
        .parent()
        .context("Current executable has no parent directory")?;
    Ok(dir.join(format!("relay{}", std::env::consts::EXE_SUFFIX)))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match check_env_file(&cli.env_file)? {
        EnvCheck::Ready { provider } => {
            info!("Environment configured (provider: {provider})");
        }
        EnvCheck::TemplateCreated => {
            warn!(
                "{} not found; wrote a template. Add your API key and re-run.",
                cli.env_file.display()
            );
            return Ok(ExitCode::FAILURE);
        }
        EnvCheck::MissingKey { variable } => {
            error!("{variable} is not configured in {}", cli.env_file.display());
            return Ok(ExitCode::FAILURE);
        }
    }

    if !cli.launch {
        info!("All checks passed. Start the server with: relay");
        return Ok(ExitCode::SUCCESS);
    }

    let relay_bin = match cli.relay_bin {
        Some(path) => path,
        None => default_relay_bin()?,
    };
    if !relay_bin.exists() {
        error!("Relay binary not found at {}", relay_bin.display());
        return Ok(ExitCode::FAILURE);
    }

    info!("Launching {}", relay_bin.display());
    let status = Command::new(&relay_bin)
        .status()
        .with_context(|| format!("Failed to start {}", relay_bin.display()))?;

    if status.success() {
        Ok(ExitCode::SUCCESS)
    } else {
        error!("Relay exited with {status}");
        Ok(ExitCode::FAILURE)
    }
}
