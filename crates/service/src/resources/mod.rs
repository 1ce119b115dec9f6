//! [`Resource`](crate::crud::Resource) implementations, one per entity.

pub mod provider;
pub mod circuit_type;
pub mod site;
pub mod circuit;
pub mod circuit_termination;
