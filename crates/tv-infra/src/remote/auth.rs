use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use tracing::info;

use tv_core::ids::UserId;
use tv_core::ports::{AuthError, AuthPort};

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    #[serde(rename = "userId")]
    user_id: String,
    token: String,
}

struct Session {
    user: UserId,
    // Held for the lifetime of the client only; never persisted.
    #[allow(dead_code)]
    token: String,
}

/// HTTP implementation of the opaque authentication boundary.
pub struct HttpAuthClient {
    client: reqwest::Client,
    base_url: Url,
    session: Mutex<Option<Session>>,
}

impl HttpAuthClient {
    pub fn from_config(config: &tv_core::config::RemoteConfig) -> Result<Self> {
        Self::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = Url::parse(base_url).context("Invalid auth base URL")?;

        Ok(Self {
            client,
            base_url,
            session: Mutex::new(None),
        })
    }

    fn sign_in_url(&self) -> Result<Url, AuthError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AuthError::Network("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(["auth", "sign_in"]);
        Ok(url)
    }
}

#[async_trait]
impl AuthPort for HttpAuthClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserId, AuthError> {
        let url = self.sign_in_url()?;

        let response = self
            .client
            .post(url)
            .json(&SignInRequest { email, password })
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AuthError::Network("request timed out".to_string())
                } else {
                    AuthError::Network(e.to_string())
                }
            })?;

        match response.status() {
            status if status.is_success() => {
                let body = response
                    .json::<SignInResponse>()
                    .await
                    .map_err(|e| AuthError::Network(e.to_string()))?;

                let user = UserId::from(body.user_id);
                let mut session = self.session.lock().expect("auth session lock poisoned");
                *session = Some(Session {
                    user: user.clone(),
                    token: body.token,
                });

                info!(user = %user, "Signed in");
                Ok(user)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::BAD_REQUEST => {
                Err(AuthError::InvalidCredentials)
            }
            status => Err(AuthError::Network(format!(
                "auth provider returned status {}",
                status
            ))),
        }
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let mut session = self.session.lock().expect("auth session lock poisoned");
        if session.take().is_some() {
            info!("Signed out");
        }
        Ok(())
    }

    fn current_user(&self) -> Option<UserId> {
        self.session
            .lock()
            .expect("auth session lock poisoned")
            .as_ref()
            .map(|s| s.user.clone())
    }
}
