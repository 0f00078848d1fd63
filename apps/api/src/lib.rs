pub mod analysis;
pub mod config;
pub mod errors;
pub mod logging;
pub mod providers;
pub mod routes;
pub mod snapshot;
pub mod state;
pub mod vocabulary;
