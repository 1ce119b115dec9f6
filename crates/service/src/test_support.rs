use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::crud;
use crate::resources::{
    circuit::{CircuitInput, CircuitResource},
    circuit_termination::{CircuitTerminationInput, CircuitTerminationResource},
    circuit_type::{CircuitTypeInput, CircuitTypeResource},
    provider::{ProviderInput, ProviderResource},
    site::{SiteInput, SiteResource},
};
use models::circuit_termination::TermSide;

/// Each call gets its own migrated in-memory database.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_memory().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

pub fn provider_input(n: u32) -> ProviderInput {
    ProviderInput {
        name: format!("Test Provider {n}"),
        slug: format!("test-provider-{n}"),
        ..ProviderInput::default()
    }
}

pub fn circuit_input(n: u32, provider: i32, circuit_type: i32) -> CircuitInput {
    CircuitInput {
        cid: format!("TEST{n:04}"),
        provider,
        circuit_type,
        ..CircuitInput::default()
    }
}

pub fn termination_input(circuit: i32, term_side: TermSide, site: i32) -> CircuitTerminationInput {
    CircuitTerminationInput {
        circuit,
        term_side,
        site,
        port_speed: 1_000_000,
        upstream_speed: None,
        xconnect_id: String::new(),
        pp_info: String::new(),
    }
}

/// Ids created by [`seed`], all starting at 1.
pub struct Fixture {
    pub providers: Vec<i32>,
    pub circuit_types: Vec<i32>,
    pub sites: Vec<i32>,
    pub circuits: Vec<i32>,
    pub terminations: Vec<i32>,
}

/// Three of each entity; terminations 1 and 2 sit on circuit 1, 3 on circuit 2.
pub async fn seed(db: &DatabaseConnection) -> Result<Fixture, anyhow::Error> {
    let mut fx = Fixture {
        providers: vec![],
        circuit_types: vec![],
        sites: vec![],
        circuits: vec![],
        terminations: vec![],
    };
    for n in 1..=3 {
        fx.providers.push(crud::create::<ProviderResource>(db, provider_input(n)).await?.id);
        let ty = CircuitTypeInput { name: format!("Test Circuit Type {n}"), slug: format!("test-circuit-type-{n}") };
        fx.circuit_types.push(crud::create::<CircuitTypeResource>(db, ty).await?.id);
        let site = SiteInput { name: format!("Test Site {n}"), slug: format!("test-site-{n}"), ..SiteInput::default() };
        fx.sites.push(crud::create::<SiteResource>(db, site).await?.id);
    }
    for n in 1..=3 {
        let input = circuit_input(n, fx.providers[0], fx.circuit_types[0]);
        fx.circuits.push(crud::create::<CircuitResource>(db, input).await?.id);
    }
    let sides = [
        (fx.circuits[0], TermSide::A),
        (fx.circuits[0], TermSide::Z),
        (fx.circuits[1], TermSide::A),
    ];
    for (circuit, side) in sides {
        let input = termination_input(circuit, side, fx.sites[0]);
        fx.terminations.push(crud::create::<CircuitTerminationResource>(db, input).await?.id);
    }
    Ok(fx)
}
