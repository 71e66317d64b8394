use std::future::Future;

use super::AuthToken;
use crate::api::ApiError;

/// Checks credentials by calling a protected endpoint.
///
/// `token` is attached explicitly when given. With `None` the implementation
/// falls back to whatever credential it already carries, if any.
pub trait RemoteValidator: Send + Sync {
    fn probe(&self, token: Option<&AuthToken>) -> impl Future<Output = Result<(), ApiError>> + Send;
}
