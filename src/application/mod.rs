pub mod auth;
pub mod search_bar;
