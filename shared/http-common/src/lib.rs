//! Shared HTTP utilities for the user directory workspace.
//!
//! Provides framework-agnostic JSON error envelopes used by the api-server.

// ============================================================================
// JSON Response Helpers (framework-agnostic)
// ============================================================================

/// Create a structured error JSON with a default message based on the code.
///
/// Returns: `{"error": {"code": "<code>", "message": "<default message>"}}`
pub fn json_err(code: &str) -> serde_json::Value {
    let message = match code {
        "error" | "internal" => "Internal server error",
        _ => code, // Fallback to code as message for unknown codes
    };
    json_error_with_message(code, message)
}

/// Create a structured error JSON with a custom message.
///
/// Returns: `{"error": {"code": "<code>", "message": "<message>"}}`
pub fn json_error_with_message(code: &str, message: &str) -> serde_json::Value {
    serde_json::json!({"error": {"code": code, "message": message}})
}

/// Not-found envelope for a user lookup.
pub fn user_not_found(id: &str) -> serde_json::Value {
    json_error_with_message("not_found", &format!("User with id {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_err() {
        let err = json_err("internal");
        assert_eq!(
            err,
            serde_json::json!({"error": {"code": "internal", "message": "Internal server error"}})
        );

        // Unknown code falls back to code as message
        let err = json_err("custom_error");
        assert_eq!(
            err,
            serde_json::json!({"error": {"code": "custom_error", "message": "custom_error"}})
        );
    }

    #[test]
    fn test_json_error_with_message() {
        let err = json_error_with_message("bad_request", "Invalid input");
        assert_eq!(
            err,
            serde_json::json!({"error": {"code": "bad_request", "message": "Invalid input"}})
        );
    }

    #[test]
    fn test_user_not_found() {
        assert_eq!(
            user_not_found("999"),
            serde_json::json!({"error": {"code": "not_found", "message": "User with id 999 not found"}})
        );
        assert_eq!(
            user_not_found("abc")["error"]["message"],
            "User with id abc not found"
        );
    }
}
