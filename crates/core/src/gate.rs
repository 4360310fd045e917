use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::types::{PreSignUpEvent, TriggerSource};

/// Logged in place of the user name when the payload carries none.
pub const UNKNOWN_USER_NAME: &str = "<unknown>";

/// Errors raised when the host hands over a payload that breaks the trigger contract.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("pre sign-up event is not a JSON object")]
    NotAnObject,
    #[error("pre sign-up event has no response object")]
    MissingResponse,
}

/// Pre sign-up gate that holds every new account for manual confirmation.
///
/// The gate never auto-confirms a user and never auto-verifies an email,
/// regardless of what the incoming event carries.
#[derive(Debug, Default, Clone, Copy)]
pub struct SignupGate;

impl SignupGate {
    pub fn new() -> Self {
        Self
    }

    /// Applies the gate to an event in place and returns the logged rationale.
    pub fn process(&self, event: &mut PreSignUpEvent) -> ConfirmationNotice {
        let trigger_source = event.trigger_source();
        let source = trigger_source.as_ref().map(TriggerSource::as_str);
        let user_name = event.user_name().unwrap_or(UNKNOWN_USER_NAME).to_string();
        info!(
            stage = "pre_sign_up",
            user_name = %user_name,
            trigger_source = source,
            event = %snapshot(&*event),
            "received pre sign-up event"
        );

        event.set_auto_confirm_user(false);
        event.set_auto_verify_email(false);

        let notice = ConfirmationNotice {
            user_name,
            email: event.email().map(str::to_string),
        };
        info!(
            stage = "pre_sign_up",
            user_name = %notice.user_name,
            trigger_source = source,
            has_email = notice.email.is_some(),
            "{notice}"
        );

        info!(
            stage = "pre_sign_up",
            user_name = %notice.user_name,
            response = %snapshot(event.response()),
            "returning pre sign-up response"
        );

        notice
    }

    /// Applies the gate to a raw trigger payload.
    ///
    /// Only the two response flags change; every other value, including
    /// nulls and fields this crate does not know about, is returned as received.
    pub fn process_value(&self, payload: Value) -> Result<Value, GateError> {
        let rejected = match &payload {
            Value::Object(fields) if fields.get("response").is_some_and(Value::is_object) => None,
            _ => Some(snapshot(&payload)),
        };

        let mut event = PreSignUpEvent::from_value(payload).inspect_err(|err| {
            warn!(
                stage = "pre_sign_up",
                error = %err,
                event = %rejected.as_deref().unwrap_or_default(),
                "rejecting pre sign-up event"
            );
        })?;

        self.process(&mut event);
        Ok(event.into_value())
    }
}

/// Full structural rendering of a value for diagnostic log lines.
fn snapshot<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| format!("<unrenderable: {err}>"))
}

/// Rationale logged for every gated sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationNotice {
    pub user_name: String,
    pub email: Option<String>,
}

impl fmt::Display for ConfirmationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.email {
            Some(email) => write!(
                f,
                "New user '{}' (email: {email}) requires manual confirmation.",
                self.user_name
            ),
            None => write!(
                f,
                "New user '{}' requires manual confirmation (no email provided).",
                self.user_name
            ),
        }
    }
}
