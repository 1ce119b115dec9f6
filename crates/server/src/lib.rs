pub mod routes;
pub mod startup;
pub mod errors;
pub mod openapi;

pub use routes::auth::ServerState;
pub use startup::run;
