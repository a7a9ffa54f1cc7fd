//! grafana-backup - Back up Grafana dashboards to local JSON files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Build the configuration and run the selected command.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Configuration precedence: profile < environment < CLI flags.

mod args;
#[macro_use]
mod cancellation;
mod backup;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;
mod logging;
mod progress;

use args::{Cli, Commands};
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use grafana_client::metrics_exporter::MetricsExporter;
use grafana_config::{Config, ConfigError, ConfigLoader};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    logging::init(cli.log_json);

    let _metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let config_context = if matches!(cli.command, Commands::Completions { .. }) {
        ConfigCommandContext::Placeholder
    } else {
        match load_config(&cli) {
            Ok(config) => ConfigCommandContext::Real(Box::new(config)),
            Err(e) => {
                eprintln!("Failed to load configuration: {:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    };

    // Create cancellation token and set up signal handling
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config_context, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Merge profile, environment and CLI flags into a validated [`Config`].
fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut loader = ConfigLoader::new();

    // Blank values are ignored so the default location still applies.
    if let Some(ref path) = cli.config_path
        && !path.to_string_lossy().trim().is_empty()
    {
        loader = loader.with_config_path(path.clone());
    }
    if let Some(ref profile_name) = cli.profile {
        loader = loader.with_profile_name(profile_name.clone());
    }

    // Profile first: env vars then override whatever the profile set.
    loader = loader.from_profile()?.from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref token) = cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    if let Commands::Backup(ref args) = cli.command {
        if let Some(ref dir) = args.output_dir {
            loader = loader.with_backup_dir(dir.clone());
        }
        if let Some(mode) = args.mode {
            loader = loader.with_mode(mode);
        }
        if let Some(scope) = args.reset_scope {
            loader = loader.with_reset_scope(scope);
        }
        if let Some(concurrency) = args.concurrency {
            loader = loader.with_concurrency(concurrency);
        }
        if args.pretty {
            loader = loader.with_pretty(true);
        }
    }

    loader.build()
}
