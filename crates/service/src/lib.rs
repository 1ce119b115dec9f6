//! Service layer providing the registry's CRUD operations on top of models.
//! - One generic implementation of list/get/create/replace/delete over [`crud::Resource`].
//! - Per-entity validation, foreign key and delete rules in [`resources`].
//! - Token authentication behind an injectable [`auth::TokenStore`].

pub mod errors;
pub mod pagination;
pub mod crud;
pub mod resources;
pub mod auth;
#[cfg(test)]
pub mod test_support;

pub use crud::Resource;
