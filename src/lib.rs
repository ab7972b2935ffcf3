pub mod account;
pub mod config;
pub mod context;
pub mod errors;
pub mod helpers;
pub mod routes;
pub mod service;
pub mod storage;
pub mod telemetry;
pub mod types;
pub mod vault;
