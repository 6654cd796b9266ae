use crate::domain::api::AuthBackend;
use crate::domain::forms::{FieldError, LoginForm, RegisterForm};
use crate::domain::user::User;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub const MSG_LOGIN_FAILED: &str = "Échec de la connexion";
pub const MSG_REGISTER_FAILED: &str = "Échec de l'inscription";
pub const MSG_UNEXPECTED: &str = "Une erreur est survenue";

/// In-memory authentication session. Holds the mock user between login and
/// logout; nothing survives a restart.
pub struct AuthSession<A: AuthBackend> {
    backend: Arc<A>,
    user: Option<User>,
    loading: bool,
    error: Option<String>,
}

impl<A: AuthBackend> AuthSession<A> {
    pub fn new(backend: Arc<A>) -> Self {
        Self {
            backend,
            user: None,
            loading: false,
            error: None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Validates the form, then submits. Field errors block the call
    /// entirely: the backend is never reached. The returned flag states
    /// whether a user is now signed in.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn login(&mut self, form: &LoginForm) -> Result<bool, Vec<FieldError>> {
        let request = form.validate()?;
        info!("Login form accepted, submitting");

        self.loading = true;
        self.error = None;

        let signed_in = match self.backend.login(request).await {
            Ok(outcome) if outcome.success && outcome.user.is_some() => {
                self.user = outcome.user;
                true
            }
            Ok(outcome) => {
                let message = outcome.error.unwrap_or_else(|| MSG_LOGIN_FAILED.to_string());
                warn!(error = %message, "Login rejected");
                self.error = Some(message);
                false
            }
            Err(e) => {
                error!(error = %e, "Login call failed");
                self.error = Some(MSG_UNEXPECTED.to_string());
                false
            }
        };

        self.loading = false;
        Ok(signed_in)
    }

    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn register(&mut self, form: &RegisterForm) -> Result<bool, Vec<FieldError>> {
        let request = form.validate()?;
        info!("Registration form accepted, submitting");

        self.loading = true;
        self.error = None;

        let signed_in = match self.backend.register(request).await {
            Ok(outcome) if outcome.success && outcome.user.is_some() => {
                self.user = outcome.user;
                true
            }
            Ok(outcome) => {
                let message = outcome
                    .error
                    .unwrap_or_else(|| MSG_REGISTER_FAILED.to_string());
                warn!(error = %message, "Registration rejected");
                self.error = Some(message);
                false
            }
            Err(e) => {
                error!(error = %e, "Registration call failed");
                self.error = Some(MSG_UNEXPECTED.to_string());
                false
            }
        };

        self.loading = false;
        Ok(signed_in)
    }

    #[instrument(skip(self))]
    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user_id = %user.id, "User logged out");
        }
    }
}
