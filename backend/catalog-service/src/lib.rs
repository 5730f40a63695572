/// Catalog Service Library
///
/// Read-only content catalog for the Elmflix streaming client: list every
/// title, or the titles of one genre.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: Content and User records
/// - `services`: Catalog service (pass-through over the repository)
/// - `db`: Repositories and migrations
/// - `middleware`: Request metrics middleware
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors and the `/metrics` handler
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
