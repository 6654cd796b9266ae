//! Client side of the search portal: typed wrappers around the backend's
//! search endpoints, the search-bar controller, and the mock auth flow.

pub mod application;
pub mod data;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
