pub mod config;
pub mod engine;
pub mod error;
pub mod profile;
pub mod router;
pub mod telemetry;
