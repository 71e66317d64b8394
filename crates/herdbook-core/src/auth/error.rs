use thiserror::Error;

use crate::api::ApiError;

/// Why a login attempt failed. Messages are meant to be shown to the user as-is.
#[derive(Error, Debug)]
pub enum LoginError {
    #[error("Invalid username or password.")]
    InvalidCredentials,

    #[error("Access denied.")]
    AccessDenied,

    #[error("Network error: unable to connect to server. Please check your connection or use guest access.")]
    NetworkError,

    #[error("{0}")]
    UnexpectedError(String),
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(_) => LoginError::NetworkError,
            ApiError::Unauthorized => LoginError::InvalidCredentials,
            ApiError::AccessDenied(_) => LoginError::AccessDenied,
            other => LoginError::UnexpectedError(other.to_string()),
        }
    }
}
