pub mod seed;
pub mod toml_config;

pub use toml_config::ServiceConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "activity-signup")]
#[command(about = "Activity signup API backed by an in-memory directory")]
#[command(version)]
pub struct CliConfig {
    #[arg(short, long, help = "TOML config file with server settings and seed activities")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Socket address to listen on, e.g. 127.0.0.1:8000")]
    pub listen: Option<String>,

    #[arg(long, help = "Reject signups once an activity reaches its capacity")]
    pub enforce_capacity: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Load the config file (or defaults), apply flag overrides, and validate.
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(listen) = &self.listen {
            config.server.listen = listen.clone();
        }
        if self.enforce_capacity {
            config.directory.enforce_capacity = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = CliConfig::parse_from(["activity-signup"]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.server.listen, toml_config::DEFAULT_LISTEN_ADDR);
        assert!(!config.enforce_capacity());
        assert!(!cli.verbose);
        assert!(!cli.json_logs);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = CliConfig::parse_from([
            "activity-signup",
            "--listen",
            "0.0.0.0:9000",
            "--enforce-capacity",
            "--json-logs",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.listen_addr().unwrap().port(), 9000);
        assert!(config.enforce_capacity());
        assert!(cli.json_logs);
    }

    #[test]
    fn test_cli_rejects_bad_listen_addr() {
        let cli = CliConfig::parse_from(["activity-signup", "--listen", "not-an-addr"]);
        assert!(cli.resolve().is_err());
    }
}
