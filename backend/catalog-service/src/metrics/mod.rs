//! Prometheus metrics for catalog-service.
//!
//! Collectors register in the default registry on first use; `/metrics`
//! renders that registry in text format.

use actix_web::HttpResponse;
use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, Encoder, HistogramVec, IntCounterVec,
    TextEncoder,
};

lazy_static! {
    /// HTTP requests by method, matched route pattern and status code.
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "http_requests_total",
        "Total HTTP requests segmented by method, route and status",
        &["method", "route", "status"]
    )
    .expect("failed to register http_requests_total");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "http_request_duration_seconds",
        "HTTP request duration segmented by method and route",
        &["method", "route"]
    )
    .expect("failed to register http_request_duration_seconds");

    /// Catalog reads by query (all/genre) and outcome (ok/error).
    pub static ref CATALOG_QUERIES_TOTAL: IntCounterVec = register_int_counter_vec!(
        "catalog_queries_total",
        "Catalog queries segmented by query kind and outcome",
        &["query", "outcome"]
    )
    .expect("failed to register catalog_queries_total");
}

pub fn record_catalog_query<T, E>(query: &str, result: &Result<T, E>) {
    let outcome = if result.is_ok() { "ok" } else { "error" };
    CATALOG_QUERIES_TOTAL
        .with_label_values(&[query, outcome])
        .inc();
}

/// Actix handler that renders Prometheus metrics in text format.
pub async fn serve_metrics() -> HttpResponse {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    let mut buffer = Vec::new();
    if let Err(err) = encoder.encode(&metric_families, &mut buffer) {
        return HttpResponse::InternalServerError().body(err.to_string());
    }

    HttpResponse::Ok()
        .content_type(encoder.format_type())
        .body(buffer)
}
