//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_provider;
mod m20240101_000002_create_circuit_type;
mod m20240101_000003_create_site;
mod m20240101_000004_create_circuit;
mod m20240101_000005_create_circuit_termination;
mod m20240101_000006_create_api_token;
mod m20240101_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_provider::Migration),
            Box::new(m20240101_000002_create_circuit_type::Migration),
            Box::new(m20240101_000003_create_site::Migration),
            Box::new(m20240101_000004_create_circuit::Migration),
            Box::new(m20240101_000005_create_circuit_termination::Migration),
            Box::new(m20240101_000006_create_api_token::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000007_add_indexes::Migration),
        ]
    }
}
