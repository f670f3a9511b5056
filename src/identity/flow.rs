//! Screen-flow decisions for identity attempts. Kept free of browser types
//! so every branch is unit-testable without a DOM.

use crate::identity::types::{Attempt, AttemptStatus};

/// What a screen must do with a finished attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The attempt completed and produced a session to activate.
    Activate { session_id: String },
    /// The attempt needs more steps; surface a diagnostic, change nothing.
    Incomplete { status: AttemptStatus },
}

/// Resolves an attempt into a screen action. Activation requires both a
/// `Complete` status and a created session id; a complete attempt without a
/// session id is treated as incomplete.
pub fn resolve_attempt(attempt: &Attempt) -> Resolution {
    match attempt.created_session_id.as_deref() {
        Some(session_id) if attempt.status == AttemptStatus::Complete => Resolution::Activate {
            session_id: session_id.to_string(),
        },
        _ => Resolution::Incomplete {
            status: attempt.status,
        },
    }
}

/// Sign-up screen phases. The enum makes "registering and entering a code at
/// the same time" unrepresentable; the view renders a total match on this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignUpPhase {
    #[default]
    Registering,
    AwaitingCode,
    Done,
}

impl SignUpPhase {
    /// Advances to code entry once registration succeeded and the
    /// verification email was dispatched.
    pub fn after_registration(self) -> Self {
        match self {
            SignUpPhase::Registering => SignUpPhase::AwaitingCode,
            other => other,
        }
    }

    /// Advances to done once the verified session was activated.
    pub fn after_activation(self) -> Self {
        match self {
            SignUpPhase::AwaitingCode => SignUpPhase::Done,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_attempt_with_session_activates() {
        let attempt = Attempt {
            status: AttemptStatus::Complete,
            created_session_id: Some("sess_1".to_string()),
        };

        assert_eq!(
            resolve_attempt(&attempt),
            Resolution::Activate {
                session_id: "sess_1".to_string()
            }
        );
    }

    #[test]
    fn needs_more_info_attempt_stays_incomplete() {
        let attempt = Attempt {
            status: AttemptStatus::NeedsMoreInfo,
            created_session_id: Some("sess_1".to_string()),
        };

        assert_eq!(
            resolve_attempt(&attempt),
            Resolution::Incomplete {
                status: AttemptStatus::NeedsMoreInfo
            }
        );
    }

    #[test]
    fn complete_attempt_without_session_is_incomplete() {
        let attempt = Attempt {
            status: AttemptStatus::Complete,
            created_session_id: None,
        };

        assert_eq!(
            resolve_attempt(&attempt),
            Resolution::Incomplete {
                status: AttemptStatus::Complete
            }
        );
    }

    #[test]
    fn registration_success_advances_to_code_entry() {
        assert_eq!(
            SignUpPhase::Registering.after_registration(),
            SignUpPhase::AwaitingCode
        );
        assert_eq!(
            SignUpPhase::AwaitingCode.after_registration(),
            SignUpPhase::AwaitingCode
        );
        assert_eq!(SignUpPhase::Done.after_registration(), SignUpPhase::Done);
    }

    #[test]
    fn activation_finishes_the_sign_up_flow() {
        assert_eq!(
            SignUpPhase::AwaitingCode.after_activation(),
            SignUpPhase::Done
        );
        assert_eq!(
            SignUpPhase::Registering.after_activation(),
            SignUpPhase::Registering
        );
    }

    #[test]
    fn no_transition_returns_to_registering() {
        for phase in [SignUpPhase::AwaitingCode, SignUpPhase::Done] {
            assert_ne!(phase.after_registration(), SignUpPhase::Registering);
            assert_ne!(phase.after_activation(), SignUpPhase::Registering);
        }
    }

    #[test]
    fn default_phase_is_registering() {
        assert_eq!(SignUpPhase::default(), SignUpPhase::Registering);
    }
}
