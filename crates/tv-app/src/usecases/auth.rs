use std::sync::Arc;

use tracing::info;

use tv_core::ids::UserId;
use tv_core::ports::{AuthError, AuthPort};

/// Sign a user in. Blank credentials are rejected before the provider is
/// contacted.
pub struct SignIn {
    auth: Arc<dyn AuthPort>,
}

impl SignIn {
    pub fn from_ports(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    #[tracing::instrument(name = "usecase.sign_in.execute", skip_all)]
    pub async fn execute(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user = self.auth.sign_in(email, password).await?;
        info!(user = %user, "Sign-in succeeded");
        Ok(user)
    }
}

/// Sign the current user out and return to the entry flow.
pub struct SignOut {
    auth: Arc<dyn AuthPort>,
}

impl SignOut {
    pub fn from_ports(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    #[tracing::instrument(name = "usecase.sign_out.execute", skip_all)]
    pub async fn execute(&self) -> Result<(), AuthError> {
        self.auth.sign_out().await
    }
}
