pub mod config;
pub mod database;
pub mod dtos;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use routes::create_router;
pub use state::AppState;
