use std::{env, fmt};

use super::lambda_function_name;

/// Application runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Test,
}

impl Environment {
    fn from_str(value: &str) -> Result<Self, ConfigError> {
        match value {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(ConfigError::InvalidEnvironment(other.to_string())),
        }
    }

    /// Returns `true` when log output should be machine readable.
    pub fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Returns the canonical name used for log labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }
}

/// Runtime configuration resolved from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub function_name: Option<String>,
}

impl AppConfig {
    /// Constructs the configuration by reading and validating environment variables.
    ///
    /// Without `APP_ENV` the environment is `production` inside Lambda and
    /// `development` everywhere else.
    pub fn from_env() -> Result<Self, ConfigError> {
        let function_name = lambda_function_name();
        let environment = match env::var("APP_ENV") {
            Ok(value) => Environment::from_str(&value)?,
            Err(_) if function_name.is_some() => Environment::Production,
            Err(_) => Environment::Development,
        };

        Ok(Self {
            environment,
            function_name,
        })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    InvalidEnvironment(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnvironment(value) => write!(
                f,
                "APP_ENV must be one of 'development', 'production', or 'test' (got {value})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
