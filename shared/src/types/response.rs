//! Common API response shapes.
//!
//! The HTTP surface deliberately has no response envelope: success bodies
//! are either `{message}` or route-specific payloads, and failures are
//! `{message}` with the status code carrying the classification.

use serde::{Deserialize, Serialize};

/// Plain message response, used for both successes and failures
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body; same wire shape as [`MessageResponse`], kept as a distinct
/// type so handlers can't confuse the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let response = MessageResponse::new("Verification code sent");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"message": "Verification code sent"}));
    }
}
