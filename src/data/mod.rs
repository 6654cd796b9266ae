pub mod http_backend;
pub mod mock_auth;
