// Middleware module
pub mod auth;
pub mod json;

pub use auth::*;
pub use json::*;
