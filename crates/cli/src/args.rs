//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//! - Convert search filter flags into [`SearchOptions`].
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate ranges (see `grafana_config::ConfigLoader::build`).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use grafana_client::{SearchKind, SearchOptions};
use grafana_config::{BackupMode, ResetScope};

use crate::formatters::OutputFormat;

#[derive(Parser)]
#[command(name = "grafana-backup")]
#[command(about = "Back up Grafana dashboards to local JSON files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  grafana-backup -b http://localhost:3000 -a $GRAFANA_API_TOKEN backup\n  grafana-backup backup --output-dir ./dashboards --mode raw --pretty\n  grafana-backup backup --reset-scope all --tag prod\n  grafana-backup search --type dash-db -o json\n  grafana-backup --profile production backup\n"
)]
pub struct Cli {
    /// Base URL of the Grafana server (e.g., http://localhost:3000)
    #[arg(short, long, global = true, env = "GRAFANA_URL")]
    pub base_url: Option<String>,

    /// API token sent as a bearer token
    #[arg(short, long, global = true, env = "GRAFANA_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "GRAFANA_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true, env = "GRAFANA_SKIP_VERIFY")]
    pub skip_verify: bool,

    /// Profile name to load from config file
    #[arg(long, global = true, env = "GRAFANA_PROFILE")]
    pub profile: Option<String>,

    /// Path to a custom configuration file (overrides default location).
    #[arg(long, global = true, env = "GRAFANA_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9090)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Suppress all progress output (spinners / progress bars).
    ///
    /// Note: Progress indicators always write to STDERR; this flag disables them entirely.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch every dashboard the search endpoint returns and write it to disk
    Backup(BackupArgs),

    /// List dashboards and folders without fetching them
    Search {
        #[command(flatten)]
        filters: SearchFilterArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug, Default)]
pub struct BackupArgs {
    /// Directory backup files are written to
    #[arg(short = 'd', long, env = "GRAFANA_BACKUP_DIR", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// What to write: `sanitized` (full document, template selections reset) or `raw` (dashboard only)
    #[arg(long, env = "GRAFANA_BACKUP_MODE", value_name = "MODE")]
    pub mode: Option<BackupMode>,

    /// Which template variables sanitized mode resets: `first` or `all`
    #[arg(long, env = "GRAFANA_RESET_SCOPE", value_name = "SCOPE")]
    pub reset_scope: Option<ResetScope>,

    /// Maximum number of dashboard fetches in flight (1-64)
    #[arg(long, env = "GRAFANA_CONCURRENCY")]
    pub concurrency: Option<usize>,

    /// Write indented JSON instead of compact JSON
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub filters: SearchFilterArgs,
}

/// Filters forwarded to `/api/search`.
#[derive(Args, Debug, Default, Clone)]
pub struct SearchFilterArgs {
    /// Free-text query matched against titles
    #[arg(long)]
    pub query: Option<String>,

    /// Only resources carrying this tag (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Only resources of this type: `dash-db` or `dash-folder`
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<SearchKind>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<usize>,
}

impl From<SearchFilterArgs> for SearchOptions {
    fn from(args: SearchFilterArgs) -> Self {
        SearchOptions {
            query: args.query,
            tags: args.tags,
            kind: args.kind,
            limit: args.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("arguments should parse")
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_backup_flags_parse() {
        let cli = parse(&[
            "grafana-backup",
            "backup",
            "--output-dir",
            "out",
            "--mode",
            "raw",
            "--reset-scope",
            "all",
            "--concurrency",
            "4",
            "--pretty",
            "--tag",
            "a",
            "--tag",
            "b",
            "--type",
            "dash-db",
        ]);

        let Commands::Backup(args) = cli.command else {
            panic!("expected backup command");
        };
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.mode, Some(BackupMode::Raw));
        assert_eq!(args.reset_scope, Some(ResetScope::All));
        assert_eq!(args.concurrency, Some(4));
        assert!(args.pretty);
        assert_eq!(args.filters.tags, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(args.filters.kind, Some(SearchKind::DashDb));
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let result = Cli::try_parse_from(["grafana-backup", "backup", "--mode", "partial"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&[
            "grafana-backup",
            "search",
            "--base-url",
            "http://grafana:3000",
            "--quiet",
            "-o",
            "json",
        ]);

        assert_eq!(cli.base_url.as_deref(), Some("http://grafana:3000"));
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Search {
                output: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_filters_convert_to_search_options() {
        let filters = SearchFilterArgs {
            query: Some("cpu".to_string()),
            tags: vec!["infra".to_string()],
            kind: Some(SearchKind::DashFolder),
            limit: Some(5),
        };
        let options = SearchOptions::from(filters);

        assert_eq!(options.query.as_deref(), Some("cpu"));
        assert_eq!(options.tags, vec!["infra".to_string()]);
        assert_eq!(options.kind, Some(SearchKind::DashFolder));
        assert_eq!(options.limit, Some(5));
    }
}
