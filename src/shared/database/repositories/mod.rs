// All repositories module
pub mod auth;
pub mod chirps;

// Re-export all repositories for convenience
pub use auth::*;
pub use chirps::*;
