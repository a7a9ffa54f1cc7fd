//! Configuration context for command execution.
//!
//! Responsibilities:
//! - Distinguish between real and placeholder configs at compile time.
//! - Provide type-safe extraction of config for commands that need it.
//!
//! Does NOT handle:
//! - Configuration loading (done in `main()`).
//! - CLI argument definitions (see `args` module).
//!
//! Invariants:
//! - Placeholder configs cannot be used for Grafana API connections.
//! - Real configs are validated before command execution.

use grafana_config::Config;

/// Context for command execution, distinguishing between real and placeholder configs.
pub(crate) enum ConfigCommandContext {
    /// A validated config loaded from profile, environment and CLI args.
    Real(Box<Config>),
    /// Used by commands that never talk to Grafana (`completions`).
    Placeholder,
}

impl ConfigCommandContext {
    /// Extract the real config, failing if this is a placeholder.
    pub(crate) fn into_real_config(self) -> anyhow::Result<Config> {
        match self {
            ConfigCommandContext::Real(config) => Ok(*config),
            ConfigCommandContext::Placeholder => {
                anyhow::bail!(
                    "Internal error: attempted to use placeholder config for an operation requiring real connection details"
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_placeholder_is_rejected() {
        let err = ConfigCommandContext::Placeholder
            .into_real_config()
            .unwrap_err();
        assert!(err.to_string().contains("placeholder config"));
    }

    #[test]
    fn test_real_config_is_returned() {
        let config = Config::with_api_token(
            "http://localhost:3000".to_string(),
            SecretString::new("token".to_string().into()),
        );
        let ctx = ConfigCommandContext::Real(Box::new(config));
        let config = ctx.into_real_config().unwrap();
        assert_eq!(config.connection.base_url, "http://localhost:3000");
    }
}
