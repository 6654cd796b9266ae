use std::env;
use tracing::debug;

/// Spring Boot's default local address, used when BACKEND_URL is unset.
const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";

/// Externally supplied settings. The backend base URL is the root address
/// for every HTTP call the client makes.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_backend_url(env::var("BACKEND_URL").ok())
    }

    fn from_backend_url(backend_url: Option<String>) -> Self {
        let backend_url = backend_url.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        debug!(backend_url = %backend_url, "Resolved backend base URL");
        Self { backend_url }
    }
}
