//! Wire types for identity-service calls. An attempt is one request/response
//! exchange in a multi-step auth flow; it carries a status and, once the flow
//! finished, the id of the newly created session. Failures carry a list of
//! human-readable descriptors. Payloads include credentials and codes, so
//! they must never be logged.

use serde::{Deserialize, Serialize};

/// Status the service reports for a sign-in or verification attempt. Only
/// `Complete` ends a flow; everything else leaves the attempt open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    Complete,
    NeedsMoreInfo,
    MissingRequirements,
    Abandoned,
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Attempt {
    pub status: AttemptStatus,
    #[serde(default)]
    pub created_session_id: Option<String>,
}

/// One human-readable failure reported by the service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDescriptor {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignInAttemptRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignUpCreateRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerificationAttemptRequest {
    pub code: String,
}

/// Result of the external-provider redirect handshake. The session id is
/// only present when the provider completed the flow.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OAuthRedirectResponse {
    #[serde(default)]
    pub created_session_id: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ActivateSessionRequest {
    pub session_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Session summary returned by the service to hydrate auth state. Contains
/// no secrets; the session itself lives in an `HttpOnly` cookie.
pub struct UserSession {
    pub user_id: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempt_decodes_status_and_session_id() {
        let attempt: Attempt =
            serde_json::from_str(r#"{"status":"complete","created_session_id":"sess_1"}"#)
                .expect("Failed to deserialize");

        assert_eq!(attempt.status, AttemptStatus::Complete);
        assert_eq!(attempt.created_session_id.as_deref(), Some("sess_1"));
    }

    #[test]
    fn attempt_session_id_defaults_to_none() {
        let attempt: Attempt = serde_json::from_str(r#"{"status":"needs_more_info"}"#)
            .expect("Failed to deserialize");

        assert_eq!(attempt.status, AttemptStatus::NeedsMoreInfo);
        assert!(attempt.created_session_id.is_none());
    }

    #[test]
    fn unrecognized_status_decodes_as_unknown() {
        let attempt: Attempt = serde_json::from_str(r#"{"status":"needs_second_factor"}"#)
            .expect("Failed to deserialize");

        assert_eq!(attempt.status, AttemptStatus::Unknown);
    }

    #[test]
    fn error_descriptor_code_is_optional() {
        let descriptors: Vec<ErrorDescriptor> = serde_json::from_str(
            r#"[
                {"message":"Password is incorrect."},
                {"message":"Too many attempts.","code":"rate_limited"}
            ]"#,
        )
        .expect("Failed to deserialize");

        assert_eq!(descriptors.len(), 2);
        assert_eq!(descriptors[0].message, "Password is incorrect.");
        assert!(descriptors[0].code.is_none());
        assert_eq!(descriptors[1].code.as_deref(), Some("rate_limited"));
    }
}
