// Admin domain models
pub mod admin;

pub use admin::*;
