mod handler;
mod telemetry;

use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use signup_gate_core::SignupGate;
use signup_gate_util::{load_env_file, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Error> {
    load_env_file();
    let config = AppConfig::from_env()?;

    telemetry::init_tracing(&config)?;

    let gate = SignupGate::new();
    info!(stage = "app", env = %config.environment.as_str(), "starting pre sign-up handler");

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        handler::handle_pre_sign_up(gate, event)
    }))
    .await
}
