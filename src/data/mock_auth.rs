use crate::domain::api::AuthBackend;
use crate::domain::user::{AuthOutcome, LoginRequest, RegisterRequest, User};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, instrument, trace};
use uuid::Uuid;

/// Name assigned when logging in: the mock backend knows nothing about the
/// user beyond the submitted email.
const MOCK_LOGIN_NAME: &str = "Utilisateur";

const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Stand-in for the real authentication backend: waits a fixed delay and
/// always succeeds. Credentials are never checked.
pub struct MockAuthBackend {
    delay: Duration,
}

impl MockAuthBackend {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockAuthBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthBackend for MockAuthBackend {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn login(&self, request: LoginRequest) -> Result<AuthOutcome> {
        trace!("Simulating login round-trip");
        sleep(self.delay).await;

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: MOCK_LOGIN_NAME.to_string(),
            email: request.email,
        };
        info!(user_id = %user.id, email = %user.email, "Mock login accepted");
        Ok(AuthOutcome::succeeded(user))
    }

    #[instrument(skip(self, request), fields(name = %request.name, email = %request.email))]
    async fn register(&self, request: RegisterRequest) -> Result<AuthOutcome> {
        trace!("Simulating registration round-trip");
        sleep(self.delay).await;

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: request.name,
            email: request.email,
        };
        info!(user_id = %user.id, email = %user.email, "Mock registration accepted");
        Ok(AuthOutcome::succeeded(user))
    }
}
