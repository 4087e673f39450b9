/*
[INPUT]:  CLI arguments, YAML configuration file, INCREASE_API_KEY
[OUTPUT]: Pretty JSON of the simulated or listed objects on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use increase_client::Environment;
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use increase_sandbox::{Command, SandboxConfig, execute};

#[derive(Parser, Debug)]
#[command(name = "increase-sandbox", version, about = "Drive Increase sandbox simulations")]
struct Cli {
    /// Defaults to <config dir>/increase/sandbox.yaml when present
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = SandboxConfig::load(args.config_path.as_deref()).context("load config")?;
    info!(
        environment = ?config.environment,
        base_url = config.base_url.as_deref().unwrap_or(config.environment.base_url()),
        "configuration loaded"
    );
    if config.environment == Environment::Production {
        warn!("simulation endpoints only exist in the sandbox environment");
    }

    let client = config.build_client()?;

    let output = match args.command {
        Command::CheckConfig => check_config_report(&config, args.config_path),
        command => execute(&client, command).await?,
    };

    let rendered = serde_json::to_string_pretty(&output).context("render output")?;
    println!("{rendered}");
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn check_config_report(config: &SandboxConfig, config_path: Option<PathBuf>) -> Value {
    let config_path = config_path.or_else(|| SandboxConfig::default_path().filter(|path| path.is_file()));
    json!({
        "status": "ok",
        "config_path": config_path.map(|path| path.display().to_string()),
        "environment": config.environment,
        "base_url": config.base_url.as_deref().unwrap_or(config.environment.base_url()),
        "api_key": config.redacted_api_key(),
        "timeout_secs": config.timeout_secs,
        "max_retries": config.max_retries,
    })
}
