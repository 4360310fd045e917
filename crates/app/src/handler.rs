use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{info_span, Instrument};

use signup_gate_core::SignupGate;

/// Lambda entry point for the Cognito pre sign-up trigger.
///
/// The payload stays as raw JSON until the gate decodes it, so the received
/// event is logged even when it violates the trigger contract.
pub async fn handle_pre_sign_up(
    gate: SignupGate,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    async move { gate.process_value(payload).map_err(Error::from) }
        .instrument(span)
        .await
}
