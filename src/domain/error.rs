use thiserror::Error;

/// Client-side failures. Display strings are what the UI shows, so the
/// backend and network variants carry the localized per-endpoint message.
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("{0}")]
    Backend(String),
    #[error("{0}")]
    Network(String),
    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),
}
