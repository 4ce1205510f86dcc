pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod transport;
