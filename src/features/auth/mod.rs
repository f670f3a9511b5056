//! Auth feature: identity-service calls and the in-memory session
//! projection. All credential, token, and verification-code logic lives in
//! the identity service; this module only wires calls and session state.
//! It touches a security boundary and must never log secrets or codes.
//!
//! Flow Overview: Sign-in submits credentials as one attempt. Sign-up
//! registers, has a code emailed, then verifies it as a second attempt. A
//! complete attempt yields a session id that is exchanged for the `HttpOnly`
//! session cookie.

pub(crate) mod client;
pub(crate) mod state;
