use serde::{Deserialize, Serialize};

/// The signed-in user. Lives only in memory; cleared on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Result shape of an authentication call. The failure branch exists for
/// completeness; the mock backend never takes it.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    pub success: bool,
    pub user: Option<User>,
    pub error: Option<String>,
}

impl AuthOutcome {
    pub fn succeeded(user: User) -> Self {
        Self {
            success: true,
            user: Some(user),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            error: Some(message.into()),
        }
    }
}
