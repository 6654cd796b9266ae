use crate::domain::user::{LoginRequest, RegisterRequest};

pub const MSG_EMAIL_INVALID: &str = "Veuillez fournir une adresse email valide.";
pub const MSG_PASSWORD_REQUIRED: &str = "Veuillez entrer votre mot de passe.";
pub const MSG_NAME_TOO_SHORT: &str = "Le nom doit contenir au moins 2 caractères.";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Le mot de passe doit contenir au moins 8 caractères.";
pub const MSG_PASSWORD_MISMATCH: &str = "Les mots de passe ne correspondent pas.";

/// Inline validation message attached to a single form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks every field and either yields the request to submit or the
    /// full list of inline errors. Nothing is submitted on error.
    pub fn validate(&self) -> Result<LoginRequest, Vec<FieldError>> {
        let mut errors = Vec::new();
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", MSG_EMAIL_INVALID));
        }
        if self.password.is_empty() {
            errors.push(FieldError::new("password", MSG_PASSWORD_REQUIRED));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.chars().count() < 2 {
            errors.push(FieldError::new("name", MSG_NAME_TOO_SHORT));
        }
        if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", MSG_EMAIL_INVALID));
        }
        if self.password.chars().count() < 8 {
            errors.push(FieldError::new("password", MSG_PASSWORD_TOO_SHORT));
        }
        // The mismatch message belongs to the confirm field, matching where
        // the form renders it.
        if self.password != self.confirm_password {
            errors.push(FieldError::new("confirm_password", MSG_PASSWORD_MISMATCH));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegisterRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

/// Shape check, not RFC 5322: one `@`, non-empty local part, and a domain
/// with an internal dot.
fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || local.contains(char::is_whitespace) {
        return false;
    }
    if domain.contains(char::is_whitespace) || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    domain.contains('.')
}
