use crate::api::ApiError;

/// What a single validation probe says about a stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Valid,
    /// The server explicitly rejected the credentials (401 or 403)
    Unauthorized,
    /// Anything else: no response, timeout, 5xx, unexpected status
    NetworkOrServerError,
}

impl AuthOutcome {
    pub fn of(probe: &Result<(), ApiError>) -> Self {
        match probe {
            Ok(()) => AuthOutcome::Valid,
            Err(e) => e.outcome(),
        }
    }

    /// Whether the session survives this outcome
    pub fn keeps_session(&self) -> bool {
        !matches!(self, AuthOutcome::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_of_probe() {
        assert_eq!(AuthOutcome::of(&Ok(())), AuthOutcome::Valid);
        assert_eq!(AuthOutcome::of(&Err(ApiError::Unauthorized)), AuthOutcome::Unauthorized);
        assert_eq!(
            AuthOutcome::of(&Err(ApiError::ServerError { status: 503, body: String::new() })),
            AuthOutcome::NetworkOrServerError
        );
    }

    #[test]
    fn test_only_unauthorized_drops_session() {
        assert!(AuthOutcome::Valid.keeps_session());
        assert!(AuthOutcome::NetworkOrServerError.keeps_session());
        assert!(!AuthOutcome::Unauthorized.keeps_session());
    }
}
