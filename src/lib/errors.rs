//! Error type shared across screens, plus the mapping from failed identity
//! responses to something a user may see. Structured failures carry the
//! service's error descriptors; everything else is sanitized before display.

use crate::identity::types::ErrorDescriptor;
use serde::Deserialize;
use std::fmt;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub enum AppError {
    Config(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Api { status: u16, errors: Vec<ErrorDescriptor> },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Api { status, errors } => match errors.first() {
                Some(descriptor) => {
                    write!(formatter, "Request failed ({status}): {}", descriptor.message)
                }
                None => write!(formatter, "Request failed ({status})"),
            },
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorDescriptor>,
}

/// Maps a failed HTTP response into an error. Identity-service failures carry
/// a JSON `errors` list; anything else becomes a sanitized HTTP error.
pub fn error_from_body(status: u16, body: String) -> AppError {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
        return AppError::Api {
            status,
            errors: parsed.errors,
        };
    }

    AppError::Http {
        status,
        message: sanitize_body(body),
    }
}

/// Returns the first reported error message, or the generic fallback when the
/// failure carries no usable descriptor.
pub fn surface_message(error: &AppError, fallback: &str) -> String {
    match error {
        AppError::Api { errors, .. } => errors
            .first()
            .map(|descriptor| descriptor.message.clone())
            .unwrap_or_else(|| fallback.to_string()),
        _ => fallback.to_string(),
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: String) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_with_descriptors_parses_as_api() {
        let error = error_from_body(
            422,
            r#"{"errors":[{"message":"Password is incorrect.","code":"form_password_incorrect"}]}"#
                .to_string(),
        );

        match error {
            AppError::Api { status, errors } => {
                assert_eq!(status, 422);
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].message, "Password is incorrect.");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn first_descriptor_message_is_surfaced() {
        let error = error_from_body(
            422,
            r#"{"errors":[{"message":"Password is incorrect."},{"message":"Too many attempts."}]}"#
                .to_string(),
        );

        assert_eq!(
            surface_message(&error, "Sign in failed"),
            "Password is incorrect."
        );
    }

    #[test]
    fn missing_descriptors_fall_back_to_generic_message() {
        let empty = error_from_body(500, r#"{"errors":[]}"#.to_string());
        assert_eq!(surface_message(&empty, "Sign in failed"), "Sign in failed");

        let network = AppError::Network("Unable to reach the server".to_string());
        assert_eq!(surface_message(&network, "Sign up failed"), "Sign up failed");
    }

    #[test]
    fn plain_text_body_becomes_sanitized_http_error() {
        let long_body = format!("  {}  ", "x".repeat(300));
        let error = error_from_body(502, long_body);

        match error {
            AppError::Http { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message.len(), 200);
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn empty_body_uses_placeholder_message() {
        let error = error_from_body(502, "   ".to_string());

        match error {
            AppError::Http { message, .. } => assert_eq!(message, "Request failed."),
            other => panic!("expected Http error, got {other:?}"),
        }
    }
}
