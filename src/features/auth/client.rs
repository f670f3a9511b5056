//! Client wrappers for the identity-service endpoints. These helpers
//! centralize paths and session-aware requests so route code never builds
//! URLs by hand. Credentials and verification codes must never be logged.

use crate::{
    app_lib::{
        get_optional_json_with_credentials, post_empty_with_credentials,
        post_empty_with_credentials_response, post_json_with_credentials,
        post_json_with_credentials_response, AppError,
    },
    identity::types::{
        ActivateSessionRequest, Attempt, OAuthRedirectResponse, SignInAttemptRequest,
        SignUpCreateRequest, UserSession, VerificationAttemptRequest,
    },
};

/// Submits a credential sign-in attempt and returns the resulting attempt.
pub async fn create_sign_in_attempt(request: &SignInAttemptRequest) -> Result<Attempt, AppError> {
    post_json_with_credentials_response("/v1/auth/sign-in", request).await
}

/// Runs the external-provider redirect handshake. A created session id is
/// only present when the provider completed the flow.
pub async fn start_oauth_redirect() -> Result<OAuthRedirectResponse, AppError> {
    post_empty_with_credentials_response("/v1/auth/oauth/google/redirect").await
}

/// Registers a new account. Email verification is a separate step.
pub async fn create_sign_up(request: &SignUpCreateRequest) -> Result<(), AppError> {
    post_json_with_credentials("/v1/auth/sign-up", request).await
}

/// Asks the service to email a verification code for the pending sign-up.
pub async fn prepare_email_verification() -> Result<(), AppError> {
    post_empty_with_credentials("/v1/auth/sign-up/prepare-verification").await
}

/// Submits the emailed verification code and returns the resulting attempt.
pub async fn attempt_email_verification(
    request: &VerificationAttemptRequest,
) -> Result<Attempt, AppError> {
    post_json_with_credentials_response("/v1/auth/sign-up/attempt-verification", request).await
}

/// Exchanges a created session id for the `HttpOnly` session cookie.
pub async fn activate_session(session_id: &str) -> Result<(), AppError> {
    let request = ActivateSessionRequest {
        session_id: session_id.to_string(),
    };
    post_json_with_credentials("/v1/auth/sessions/activate", &request).await
}

/// Clears the current session on the server.
pub async fn terminate_session() -> Result<(), AppError> {
    post_empty_with_credentials("/v1/auth/logout").await
}

/// Fetches the current session using cookie-based auth.
/// Returns `None` when the session is missing or expired.
pub async fn fetch_session() -> Result<Option<UserSession>, AppError> {
    get_optional_json_with_credentials("/v1/auth/session").await
}
