// Admin handlers
pub mod admin_handler;

pub use admin_handler::*;
