use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::gate::GateError;

/// Attribute key Cognito uses for the user's email address.
pub const EMAIL_ATTRIBUTE: &str = "email";

const RESPONSE_KEY: &str = "response";
const AUTO_CONFIRM_USER: &str = "autoConfirmUser";
const AUTO_VERIFY_EMAIL: &str = "autoVerifyEmail";

/// Cognito User Pools pre sign-up trigger payload.
///
/// The payload is kept exactly as received. Only the `response` object is
/// required; every other field is read through optional accessors and is
/// returned to the platform untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct PreSignUpEvent {
    fields: Map<String, Value>,
    response: Map<String, Value>,
}

impl PreSignUpEvent {
    /// Wraps a raw trigger payload, requiring a `response` object.
    pub fn from_value(payload: Value) -> Result<Self, GateError> {
        let Value::Object(mut fields) = payload else {
            return Err(GateError::NotAnObject);
        };
        match fields.remove(RESPONSE_KEY) {
            Some(Value::Object(response)) => Ok(Self { fields, response }),
            _ => Err(GateError::MissingResponse),
        }
    }

    /// Returns the payload with any response changes applied.
    pub fn into_value(self) -> Value {
        let mut fields = self.fields;
        fields.insert(RESPONSE_KEY.to_string(), Value::Object(self.response));
        Value::Object(fields)
    }

    pub fn user_name(&self) -> Option<&str> {
        self.str_field("userName")
    }

    pub fn version(&self) -> Option<&str> {
        self.str_field("version")
    }

    pub fn region(&self) -> Option<&str> {
        self.str_field("region")
    }

    pub fn user_pool_id(&self) -> Option<&str> {
        self.str_field("userPoolId")
    }

    /// Returns the app client that started the sign-up.
    pub fn client_id(&self) -> Option<&str> {
        self.fields
            .get("callerContext")
            .and_then(|context| context.get("clientId"))
            .and_then(Value::as_str)
    }

    /// Returns the parsed trigger source, if the platform sent one.
    pub fn trigger_source(&self) -> Option<TriggerSource> {
        self.str_field("triggerSource").map(TriggerSource::parse)
    }

    /// Looks up `request.userAttributes.<name>`; any missing segment yields `None`.
    pub fn user_attribute(&self, name: &str) -> Option<&Value> {
        self.fields
            .get("request")
            .and_then(|request| request.get("userAttributes"))
            .and_then(|attributes| attributes.get(name))
    }

    /// Returns the user's email attribute when one is present and non-empty.
    pub fn email(&self) -> Option<&str> {
        self.user_attribute(EMAIL_ATTRIBUTE)
            .and_then(Value::as_str)
            .filter(|email| !email.is_empty())
    }

    /// Current response object sent back to the identity platform.
    pub fn response(&self) -> &Map<String, Value> {
        &self.response
    }

    pub fn auto_confirm_user(&self) -> Option<bool> {
        self.response.get(AUTO_CONFIRM_USER).and_then(Value::as_bool)
    }

    pub fn auto_verify_email(&self) -> Option<bool> {
        self.response.get(AUTO_VERIFY_EMAIL).and_then(Value::as_bool)
    }

    pub fn set_auto_confirm_user(&mut self, value: bool) {
        self.response
            .insert(AUTO_CONFIRM_USER.to_string(), Value::Bool(value));
    }

    pub fn set_auto_verify_email(&mut self, value: bool) {
        self.response
            .insert(AUTO_VERIFY_EMAIL.to_string(), Value::Bool(value));
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

impl TryFrom<Value> for PreSignUpEvent {
    type Error = GateError;

    fn try_from(payload: Value) -> Result<Self, Self::Error> {
        Self::from_value(payload)
    }
}

impl Serialize for PreSignUpEvent {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(RESPONSE_KEY, &self.response)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for PreSignUpEvent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let payload = Value::deserialize(deserializer)?;
        Self::from_value(payload).map_err(D::Error::custom)
    }
}

/// Cognito flow that produced a pre sign-up invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerSource {
    SignUp,
    AdminCreateUser,
    ExternalProvider,
    Other(String),
}

impl TriggerSource {
    pub fn parse(value: &str) -> Self {
        match value {
            "PreSignUp_SignUp" => Self::SignUp,
            "PreSignUp_AdminCreateUser" => Self::AdminCreateUser,
            "PreSignUp_ExternalProvider" => Self::ExternalProvider,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::SignUp => "PreSignUp_SignUp",
            Self::AdminCreateUser => "PreSignUp_AdminCreateUser",
            Self::ExternalProvider => "PreSignUp_ExternalProvider",
            Self::Other(value) => value,
        }
    }
}
