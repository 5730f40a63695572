/// HTTP handlers for catalog-service
///
/// - Content: list the catalog, filter by genre
/// - Health: liveness/readiness checks
pub mod content;
pub mod health;

use crate::error::AppError;
use actix_web::{web, HttpRequest};

pub use content::{get_all_content, get_content_by_genre};
pub use health::{health_summary, liveness_check, readiness_summary, HealthState};

/// Register the catalog routes under `/api/content`.
pub fn configure_content_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/content")
            .route("", web::get().to(get_all_content))
            .route("/genre/{genre}", web::get().to(get_content_by_genre)),
    );
}

/// Register the health checks under `/api/health`.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/health")
            .route("", web::get().to(health_summary))
            .route("/ready", web::get().to(readiness_summary))
            .route("/live", web::get().to(liveness_check)),
    );
}

/// Default service: unknown routes get the same JSON error shape as handler errors.
pub async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, AppError> {
    Err(AppError::NotFound(req.path().to_string()))
}
