//! Contract with the external identity service. FreeMov owns no credential,
//! token, or verification-code logic; these types mirror the service's wire
//! format and the flow helpers decide what a screen does with each response.
//! Target-independent so the decision logic stays unit-testable on the host.

pub(crate) mod flow;
pub(crate) mod types;
