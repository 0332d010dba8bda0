use async_trait::async_trait;

use crate::ids::UserId;
use crate::ports::errors::AuthError;

/// Opaque authentication boundary.
///
/// Session-token handling beyond the lifetime of the implementation is out
/// of scope; `current_user` reflects in-memory state only.
#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    fn current_user(&self) -> Option<UserId>;
}
