//! Domain layer for the Cognito pre sign-up trigger.
//!
//! [`types`] models the trigger payload and [`gate`] holds the decision logic
//! that keeps every new account waiting for manual confirmation.
pub mod gate;
pub mod types;

pub use gate::{ConfirmationNotice, GateError, SignupGate, UNKNOWN_USER_NAME};
pub use types::{PreSignUpEvent, TriggerSource};
