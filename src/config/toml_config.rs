use crate::config::seed::default_activities;
use crate::domain::model::ActivitySeed;
use crate::utils::error::{Result, SignupError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_socket_addr, validate_unique,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default = "default_activities")]
    pub activities: Vec<ActivitySeed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen")]
    pub listen: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default)]
    pub enforce_capacity: bool,
}

fn default_listen() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            directory: DirectoryConfig::default(),
            activities: default_activities(),
        }
    }
}

impl ServiceConfig {
    /// Load the config from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse the config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SignupError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR}` with the environment value. Unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SignupError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        validate_socket_addr("server.listen", &self.server.listen)
    }

    pub fn enforce_capacity(&self) -> bool {
        self.directory.enforce_capacity
    }

    pub fn validate_config(&self) -> Result<()> {
        self.listen_addr()?;

        validate_positive_number("activities", self.activities.len(), 1)?;
        validate_unique(
            "activities.name",
            self.activities.iter().map(|a| a.name.as_str()),
        )?;

        for (index, activity) in self.activities.iter().enumerate() {
            let field = |name: &str| format!("activities[{}].{}", index, name);

            validate_non_empty_string(&field("name"), &activity.name)?;
            validate_non_empty_string(&field("description"), &activity.description)?;
            validate_positive_number(&field("capacity"), activity.capacity, 1)?;

            for email in &activity.participants {
                validate_non_empty_string(&field("participants"), email)?;
            }
            validate_unique(
                &field("participants"),
                activity.participants.iter().map(String::as_str),
            )?;

            if self.enforce_capacity() && activity.participants.len() > activity.capacity {
                return Err(SignupError::ConfigValidationError {
                    field: field("participants"),
                    message: format!(
                        "{} participants exceed capacity {}",
                        activity.participants.len(),
                        activity.capacity
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
