/// Configuration management for Catalog Service
///
/// Settings come from environment variables (optionally seeded from a
/// `.env` file by the binary).
use db_pool::{env_or, parse_env_or};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Seed the process environment from a dotenv file (`./.env` when `path` is
/// `None`). Variables already set are left alone; a missing file is not an error.
pub fn load_env(path: Option<&Path>) {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|_| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };
    if let Err(e) = loaded {
        if !e.not_found() {
            eprintln!("Ignoring unreadable .env file: {}", e);
        }
    }
}

/// Local health endpoint hit by the `healthcheck` subcommand.
pub fn healthcheck_url() -> Result<String, String> {
    let port: u16 = parse_env_or("CATALOG_SERVICE_PORT", 8080)?;
    Ok(format!("http://127.0.0.1:{}/api/health", port))
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub cors: CorsConfig,
    pub database: DatabaseConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    pub host: String,
    pub port: u16,
    /// Number of actix worker threads
    pub workers: usize,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// Apply embedded migrations at startup (ignored in production)
    pub run_migrations: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = env_or("APP_ENV", "development");
        let production = app_env.eq_ignore_ascii_case("production");

        let workers: usize = parse_env_or("CATALOG_SERVICE_WORKERS", 4)?;
        if workers == 0 {
            return Err("CATALOG_SERVICE_WORKERS must be at least 1".to_string());
        }

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: env_or("CATALOG_SERVICE_HOST", "0.0.0.0"),
                port: parse_env_or("CATALOG_SERVICE_PORT", 8080)?,
                workers,
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if production => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if production && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            database: DatabaseConfig {
                url: env_or("DATABASE_URL", "postgres://localhost/catalog"),
                max_connections: parse_env_or("DATABASE_MAX_CONNECTIONS", 10)?,
                run_migrations: parse_env_or("RUN_MIGRATIONS", true)?,
            },
        })
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case("production")
    }

    pub fn http_bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }

    /// Trimmed, non-empty origins from `CORS_ALLOWED_ORIGINS`.
    pub fn allowed_origins(&self) -> Vec<&str> {
        self.cors
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
