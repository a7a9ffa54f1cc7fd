//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Extract the validated configuration for commands that talk to Grafana.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()` and `config_context`).
//!
//! Invariants:
//! - All commands receive a valid cancellation token.

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;
use crate::config_context::ConfigCommandContext;

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: ConfigCommandContext,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let metrics_enabled = cli.metrics_bind.is_some();

    match cli.command {
        Commands::Backup(args) => {
            let config = config.into_real_config()?;
            commands::backup::run(
                config,
                args.filters,
                cli.quiet,
                metrics_enabled,
                cancel_token,
            )
            .await?;
        }
        Commands::Search { filters, output } => {
            let config = config.into_real_config()?;
            commands::search::run(
                config,
                filters,
                output,
                cli.quiet,
                metrics_enabled,
                cancel_token,
            )
            .await?;
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell)?;
        }
    }

    Ok(())
}
