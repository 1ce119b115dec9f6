#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use migration::MigratorTrait;
use models::circuit_termination::TermSide;
use sea_orm::DatabaseConnection;
use server::ServerState;
use service::auth::repository::mock::MemoryTokenStore;
use service::crud;
use service::resources::{
    circuit::{CircuitInput, CircuitResource},
    circuit_termination::{CircuitTerminationInput, CircuitTerminationResource},
    circuit_type::{CircuitTypeInput, CircuitTypeResource},
    provider::{ProviderInput, ProviderResource},
    site::{SiteInput, SiteResource},
};

pub const WRITE_KEY: &str = "0123456789abcdef0123456789abcdef01234567";
pub const READ_KEY: &str = "readonly0123456789abcdef0123456789abcdef";

pub fn write_token() -> String { format!("Token {WRITE_KEY}") }
pub fn read_token() -> String { format!("Token {READ_KEY}") }

/// Three providers, circuit types, sites and circuits; terminations 1 and 2
/// on circuit 1, termination 3 on circuit 2.
pub async fn seed(db: &DatabaseConnection) -> anyhow::Result<()> {
    for n in 1..=3 {
        let provider = ProviderInput {
            name: format!("Test Provider {n}"),
            slug: format!("test-provider-{n}"),
            ..ProviderInput::default()
        };
        crud::create::<ProviderResource>(db, provider).await?;
        let circuit_type = CircuitTypeInput {
            name: format!("Test Circuit Type {n}"),
            slug: format!("test-circuit-type-{n}"),
        };
        crud::create::<CircuitTypeResource>(db, circuit_type).await?;
        let site = SiteInput {
            name: format!("Test Site {n}"),
            slug: format!("test-site-{n}"),
            ..SiteInput::default()
        };
        crud::create::<SiteResource>(db, site).await?;
    }
    for n in 1..=3 {
        let circuit = CircuitInput {
            cid: format!("TEST000{n}"),
            provider: 1,
            circuit_type: 1,
            ..CircuitInput::default()
        };
        crud::create::<CircuitResource>(db, circuit).await?;
    }
    for (circuit, term_side) in [(1, TermSide::A), (1, TermSide::Z), (2, TermSide::A)] {
        let termination = CircuitTerminationInput {
            circuit,
            term_side,
            site: 1,
            port_speed: 1_000_000,
            upstream_speed: None,
            xconnect_id: String::new(),
            pp_info: String::new(),
        };
        crud::create::<CircuitTerminationResource>(db, termination).await?;
    }
    Ok(())
}

/// Router over a fresh, seeded in-memory database with one write-enabled and
/// one read-only token.
pub async fn test_app() -> anyhow::Result<Router> {
    let db = models::db::connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    seed(&db).await?;
    let store = MemoryTokenStore::with_keys(&[(WRITE_KEY, true), (READ_KEY, false)])?;
    let state = ServerState::with_token_store(db, Arc::new(store));
    Ok(server::startup::app(state))
}
