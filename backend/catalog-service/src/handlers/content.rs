/// Content handlers - the catalog read endpoints
use crate::error::Result;
use crate::models::Content;
use crate::services::CatalogService;
use actix_web::{web, HttpResponse};

/// List the whole catalog
#[utoipa::path(
    get,
    path = "/api/content",
    tag = "content",
    responses(
        (status = 200, description = "Every catalog item (empty array when the catalog is empty)", body = [Content]),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_all_content(service: web::Data<CatalogService>) -> Result<HttpResponse> {
    let content = service.get_all_content().await?;
    Ok(HttpResponse::Ok().json(content))
}

/// List catalog items of one genre (exact, case-sensitive match)
#[utoipa::path(
    get,
    path = "/api/content/genre/{genre}",
    tag = "content",
    params(
        ("genre" = String, Path, description = "Genre to match exactly")
    ),
    responses(
        (status = 200, description = "Matching catalog items, possibly none", body = [Content]),
        (status = 503, description = "Storage unavailable")
    )
)]
pub async fn get_content_by_genre(
    service: web::Data<CatalogService>,
    genre: web::Path<String>,
) -> Result<HttpResponse> {
    let genre = genre.into_inner();
    let content = service.get_content_by_genre(&genre).await?;
    Ok(HttpResponse::Ok().json(content))
}
