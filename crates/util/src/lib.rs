pub mod config;

use std::env;

pub use config::{AppConfig, ConfigError, Environment};

/// Environment variable the Lambda service sets on every function instance.
pub const LAMBDA_FUNCTION_NAME_VAR: &str = "AWS_LAMBDA_FUNCTION_NAME";

/// Loads environment variables from `.env` when available.
///
/// Missing files are ignored so the function is safe inside the Lambda
/// execution environment where dotenv files are not deployed.
pub fn load_env_file() {
    let _ = dotenvy::dotenv();
}

/// Returns the name of the Lambda function this process serves, if any.
///
/// Empty values are treated as unset.
pub fn lambda_function_name() -> Option<String> {
    env::var(LAMBDA_FUNCTION_NAME_VAR)
        .ok()
        .filter(|value| !value.is_empty())
}
