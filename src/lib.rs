pub mod config;
pub mod error;
pub mod executor;
pub mod model;
pub mod normalize;
pub mod providers;
pub mod routes;
pub mod state;
pub mod tasks;
