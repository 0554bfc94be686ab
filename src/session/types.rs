use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for the login endpoint.
///
/// Fields keep their raw JSON value so a missing or falsy one can be told apart
/// from one of the wrong type, which is a credential mismatch instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

impl LoginRequest {
    /// Parses a raw body as JSON. Anything but a JSON object yields an empty request.
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(body)?;

        Ok(match value {
            Value::Object(mut fields) => Self {
                email: fields.remove("email"),
                password: fields.remove("password"),
            },
            _ => Self::default(),
        })
    }

    /// Both fields are present and truthy
    pub fn has_credentials(&self) -> bool {
        self.email.as_ref().is_some_and(is_truthy) && self.password.as_ref().is_some_and(is_truthy)
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Response structure for a successful login
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

/// Session token taken from the request cookie, added to request extensions by `session_auth`
#[derive(Debug, Clone, PartialEq)]
pub struct SessionToken(pub String);
