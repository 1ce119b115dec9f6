//! Token authentication: domain, store abstraction and the authenticating service.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use repository::TokenStore;
pub use service::AuthService;
