use serde::{Deserialize, Serialize};

/// Response body of the example endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExampleResponse {
    pub message: String,
    pub app_name: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
}
