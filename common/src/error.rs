//! Error taxonomy shared by every page.
//!
//! - [`ValidationError`]: form input rejected locally; no request is issued.
//! - [`ApiError`]: a request was attempted and failed, split into "the server
//!   answered with a non-2xx", "nothing came back", and "the client could not
//!   build the request or read the answer".
//!
//! Precondition failures of the upload workflow are not errors in this sense;
//! they are status notices produced by [`crate::workflow`].

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx answer. `message` is taken from the body when it has one.
    #[error("{}", describe_server(.status, .message))]
    Server { status: u16, message: Option<String> },

    /// Request left the browser but no response arrived (network failure,
    /// CORS rejection, or aborted by timeout).
    #[error("No response received from server.")]
    NoResponse { detail: String },

    /// Request could not be built, or the response body could not be decoded.
    #[error("{0}")]
    Client(String),
}

impl ApiError {
    /// Builds a [`ApiError::Server`] from a status code and raw response body.
    ///
    /// The body's `error` field wins over its `message` field; a body that is
    /// not JSON or has neither field leaves `message` empty.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Server {
            status,
            message: body_message(body),
        }
    }

    pub fn no_response(detail: impl Into<String>) -> Self {
        ApiError::NoResponse {
            detail: detail.into(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message the server put in its body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

fn describe_server(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("Server responded with status {}", status),
    }
}

fn body_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// Minimum password length accepted when registering.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Form input rejected before any request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingCredentials,
    #[error("All fields are required.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Password must be at least {} characters.", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_prefers_error_field() {
        let err = ApiError::from_status(400, r#"{"error": "No file part in the request", "message": "x"}"#);
        assert_eq!(err.to_string(), "No file part in the request");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn server_error_falls_back_to_message_field() {
        let err = ApiError::from_status(401, r#"{"message": "Invalid username or password"}"#);
        assert_eq!(err.server_message(), Some("Invalid username or password"));
    }

    #[test]
    fn server_error_without_body_message_uses_status() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), "Server responded with status 502");
        assert_eq!(err.server_message(), None);
    }

    #[test]
    fn no_response_hides_transport_detail() {
        let err = ApiError::no_response("TypeError: Failed to fetch");
        assert_eq!(err.to_string(), "No response received from server.");
    }

    #[test]
    fn password_message_names_minimum() {
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters."
        );
    }
}
