use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::{anyhow, Context};
use catalog_service::db::{run_migrations, PgContentRepository};
use catalog_service::handlers::{self, HealthState};
use catalog_service::middleware::MetricsMiddleware;
use catalog_service::openapi::ApiDoc;
use catalog_service::services::CatalogService;
use catalog_service::Config;
use db_pool::{create_pool, DbConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

const SERVICE_NAME: &str = "catalog-service";

/// `catalog-service healthcheck`: call the local health endpoint for container healthchecks.
async fn run_healthcheck() -> anyhow::Result<()> {
    let url = catalog_service::config::healthcheck_url().map_err(|e| anyhow!(e))?;

    let resp = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .with_context(|| format!("healthcheck request to {} failed", url))?;

    if resp.status().is_success() {
        Ok(())
    } else {
        Err(anyhow!("healthcheck HTTP status: {}", resp.status()))
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn build_cors(config: &Config) -> Cors {
    let mut cors = Cors::default();
    for origin in config.allowed_origins() {
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }
    cors.allowed_methods(vec!["GET"])
        .allow_any_header()
        .max_age(3600)
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut terminate) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = terminate.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

/// Catalog Service
///
/// # Routes
///
/// - `GET /api/content` - every catalog item
/// - `GET /api/content/genre/{genre}` - catalog items of one genre
/// - `/api/health`, `/api/health/ready`, `/api/health/live` - health checks
/// - `/metrics` - Prometheus
///
/// Composition is explicit: pool → `PgContentRepository` → `CatalogService`
/// → handlers.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    catalog_service::config::load_env(None);

    if let Some(cmd) = std::env::args().nth(1) {
        if cmd == "healthcheck" || cmd == "healthcheck-http" {
            return run_healthcheck().await;
        }
    }

    init_tracing();

    let config = Config::from_env()
        .map_err(|e| anyhow!(e))
        .context("Failed to load configuration")?;

    tracing::info!("Starting {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let mut db_cfg = DbConfig::from_env(SERVICE_NAME)
        .map_err(|e| anyhow!(e))
        .context("Invalid database pool configuration")?;
    if db_cfg.database_url.is_empty() {
        db_cfg.database_url = config.database.url.clone();
    }
    if std::env::var("DB_MAX_CONNECTIONS").is_err() {
        db_cfg.max_connections = config.database.max_connections;
        db_cfg.min_connections = db_cfg.min_connections.min(db_cfg.max_connections);
    }
    db_cfg.log_config();

    let db_pool = create_pool(db_cfg)
        .await
        .context("Failed to create database pool")?;
    tracing::info!("Connected to database");

    if config.database.run_migrations && !config.is_production() {
        tracing::info!("Running database migrations...");
        run_migrations(&db_pool)
            .await
            .context("Database migrations failed")?;
        tracing::info!("Database migrations completed");
    } else {
        tracing::info!(
            "Skipping database migrations (run_migrations={}, env={})",
            config.database.run_migrations,
            config.app.env
        );
    }

    let repository = Arc::new(PgContentRepository::new(db_pool.clone()));
    let catalog = web::Data::new(CatalogService::new(repository));
    let health_state = web::Data::new(HealthState::new(db_pool.clone()));

    let bind_address = config.http_bind_address();
    tracing::info!("Starting HTTP server at {}", bind_address);

    let server_config = config.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(catalog.clone())
            .app_data(health_state.clone())
            .wrap(MetricsMiddleware)
            .wrap(build_cors(&server_config))
            .wrap(Logger::default())
            .wrap(tracing_actix_web::TracingLogger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url(ApiDoc::openapi_json_path(), ApiDoc::openapi()),
            )
            .route("/metrics", web::get().to(catalog_service::metrics::serve_metrics))
            .configure(handlers::configure_health_routes)
            .configure(handlers::configure_content_routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .workers(config.app.workers)
    .disable_signals()
    .run();

    let server_handle = server.handle();
    tokio::spawn(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        server_handle.stop(true).await;
    });

    server.await.context("HTTP server error")?;

    db_pool.close().await;
    tracing::info!("Catalog-service shutting down");
    Ok(())
}
