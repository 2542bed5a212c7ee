use crate::error::ApiError;
use crate::model::profile::Profile;
use crate::session::Session;

/// Where the guard stands for the current protected-page evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GuardState {
    #[default]
    Pending,
    Authorized(Profile),
    Unauthorized,
}

/// What the hosting component must do next.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardCommand {
    /// Nothing to do; the event was stale or a no-op.
    None,
    /// Look up the profile for `user_id` and report back with `ticket`.
    Validate { user_id: String, ticket: u64 },
    /// Render the protected content.
    Render,
    /// Navigate to the login page.
    Redirect,
}

/// Route-protection state machine: `Pending -> {Authorized, Unauthorized}`.
///
/// Every call to [`SessionGuard::begin`] starts a new evaluation and issues a
/// fresh ticket. A validation result carrying an older ticket belongs to a
/// navigation the user has already left and is dropped, so a slow response
/// can never redirect or render on behalf of a page that is no longer shown.
#[derive(Debug, Default)]
pub struct SessionGuard {
    state: GuardState,
    ticket: u64,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, GuardState::Pending)
    }

    pub fn profile(&self) -> Option<&Profile> {
        match &self.state {
            GuardState::Authorized(profile) => Some(profile),
            _ => None,
        }
    }

    /// Starts evaluating a navigation to a protected path.
    ///
    /// Without a stored identifier this redirects immediately and no lookup
    /// is requested.
    pub fn begin(&mut self, session: &Session) -> GuardCommand {
        self.ticket = self.ticket.wrapping_add(1);
        match session.user_id() {
            None => {
                self.state = GuardState::Unauthorized;
                GuardCommand::Redirect
            }
            Some(user_id) => {
                self.state = GuardState::Pending;
                GuardCommand::Validate {
                    user_id,
                    ticket: self.ticket,
                }
            }
        }
    }

    /// Applies the outcome of the profile lookup for `ticket`.
    ///
    /// Any failure, whether the backend rejected the identifier or never
    /// answered, clears the stored identifier.
    pub fn resolve(
        &mut self,
        ticket: u64,
        result: Result<Profile, ApiError>,
        session: &Session,
    ) -> GuardCommand {
        if ticket != self.ticket || !self.is_pending() {
            log::debug!(
                "dropping stale session validation (ticket {}, current {})",
                ticket,
                self.ticket
            );
            return GuardCommand::None;
        }

        match result {
            Ok(profile) => {
                self.state = GuardState::Authorized(profile);
                GuardCommand::Render
            }
            Err(err) => {
                log::warn!("session validation failed: {}", err);
                session.sign_out();
                self.state = GuardState::Unauthorized;
                GuardCommand::Redirect
            }
        }
    }

    /// Abandons the current evaluation, e.g. when the host unmounts.
    pub fn cancel(&mut self) {
        self.ticket = self.ticket.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str) -> Profile {
        Profile {
            user_id: id.to_string(),
            name: "Asha".to_string(),
            email: "asha@x.org".to_string(),
            role: "user".to_string(),
        }
    }

    #[test]
    fn no_identifier_redirects_without_lookup() {
        let session = Session::in_memory();
        let mut guard = SessionGuard::new();
        assert_eq!(guard.begin(&session), GuardCommand::Redirect);
        assert_eq!(guard.state(), &GuardState::Unauthorized);
    }

    #[test]
    fn stored_identifier_is_validated_then_rendered() {
        let session = Session::in_memory();
        session.sign_in("abc123");
        let mut guard = SessionGuard::new();

        let GuardCommand::Validate { user_id, ticket } = guard.begin(&session) else {
            panic!("expected a validation request");
        };
        assert_eq!(user_id, "abc123");
        assert!(guard.is_pending());

        assert_eq!(guard.resolve(ticket, Ok(profile("abc123")), &session), GuardCommand::Render);
        assert_eq!(guard.profile().map(|p| p.user_id.as_str()), Some("abc123"));
        assert!(session.is_signed_in());
    }

    #[test]
    fn rejected_identifier_is_cleared() {
        let session = Session::in_memory();
        session.sign_in("ghost");
        let mut guard = SessionGuard::new();
        let GuardCommand::Validate { ticket, .. } = guard.begin(&session) else {
            panic!("expected a validation request");
        };

        let rejected = ApiError::from_status(404, r#"{"message": "User not found"}"#);
        assert_eq!(guard.resolve(ticket, Err(rejected), &session), GuardCommand::Redirect);
        assert_eq!(session.user_id(), None);
        assert_eq!(guard.state(), &GuardState::Unauthorized);
    }

    #[test]
    fn network_failure_also_clears() {
        let session = Session::in_memory();
        session.sign_in("abc123");
        let mut guard = SessionGuard::new();
        let GuardCommand::Validate { ticket, .. } = guard.begin(&session) else {
            panic!("expected a validation request");
        };
        let outcome = guard.resolve(ticket, Err(ApiError::no_response("offline")), &session);
        assert_eq!(outcome, GuardCommand::Redirect);
        assert!(!session.is_signed_in());
    }

    #[test]
    fn superseded_response_is_ignored() {
        let session = Session::in_memory();
        session.sign_in("abc123");
        let mut guard = SessionGuard::new();

        let GuardCommand::Validate { ticket: first, .. } = guard.begin(&session) else {
            panic!("expected a validation request");
        };
        let GuardCommand::Validate { ticket: second, .. } = guard.begin(&session) else {
            panic!("expected a validation request");
        };

        let late_failure = ApiError::no_response("timeout");
        assert_eq!(guard.resolve(first, Err(late_failure), &session), GuardCommand::None);
        assert!(session.is_signed_in(), "stale failure must not sign out");
        assert!(guard.is_pending());

        assert_eq!(guard.resolve(second, Ok(profile("abc123")), &session), GuardCommand::Render);
    }

    #[test]
    fn cancelled_evaluation_ignores_late_result() {
        let session = Session::in_memory();
        session.sign_in("abc123");
        let mut guard = SessionGuard::new();
        let GuardCommand::Validate { ticket, .. } = guard.begin(&session) else {
            panic!("expected a validation request");
        };
        guard.cancel();
        assert_eq!(guard.resolve(ticket, Ok(profile("abc123")), &session), GuardCommand::None);
        assert!(guard.is_pending());
    }
}
