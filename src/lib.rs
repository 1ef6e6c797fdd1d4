pub mod domains;
pub mod openapi;
pub mod routes;
pub mod shared;
