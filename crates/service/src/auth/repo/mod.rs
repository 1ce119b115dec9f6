pub mod seaorm;

pub use seaorm::SeaOrmTokenStore;
