use serde::{Deserialize, Serialize};

/// Message used when a failed response carries no usable error message.
pub const GENERIC_API_ERROR: &str = "API request failed";

/// Represents an error returned from the `OpenAI` API.
///
/// This struct is used to deserialize the JSON object that the `OpenAI` API
/// returns when a request fails. Proxies and gateways in front of the API do
/// not always follow that shape, so every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct OpenAIError {
    /// Contains specific details about the error.
    pub error: Option<ErrorDetails>,
}

/// Contains detailed information about an error from the `OpenAI` API.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ErrorDetails {
    /// A human-readable message providing more details about the error.
    pub message: Option<String>,

    /// The type of error returned.
    pub r#type: Option<String>,

    /// (Optional) The specific parameter in the request that caused the error.
    pub param: Option<String>,

    /// (Optional) A code corresponding to the error. Sent as a string by the
    /// API but as a number by some gateways.
    pub code: Option<serde_json::Value>,
}

impl OpenAIError {
    /// Extracts the message to show for a failed request body.
    ///
    /// Falls back to [`GENERIC_API_ERROR`] when the body is not JSON or has
    /// no non-empty `error.message`.
    pub fn message_from_body(body: &str) -> String {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|e| e.error)
            .and_then(|d| d.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_API_ERROR.to_string())
    }
}
