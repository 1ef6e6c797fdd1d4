// Auth domain services
pub mod auth_service;
pub mod authorization;
pub mod jwt_service;
pub mod password;
pub mod refresh_token;
pub mod state;

pub use auth_service::*;
pub use authorization::*;
pub use jwt_service::*;
pub use password::*;
pub use refresh_token::*;
pub use state::*;
