/// Catalog service - read-only access to the content catalog
use crate::db::ContentRepository;
use crate::error::Result;
use crate::metrics::record_catalog_query;
use crate::models::Content;
use std::sync::Arc;

/// Forwards catalog reads to the repository without transforming either the
/// arguments or the results.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn ContentRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    /// All content, in repository order
    pub async fn get_all_content(&self) -> Result<Vec<Content>> {
        let result = self.repo.find_all().await;
        record_catalog_query("all", &result);
        result
    }

    /// Content whose genre equals `genre`. Any string is accepted, including
    /// an empty one; an unknown genre yields an empty list.
    pub async fn get_content_by_genre(&self, genre: &str) -> Result<Vec<Content>> {
        let result = self.repo.find_by_genre(genre).await;
        record_catalog_query("genre", &result);
        result
    }
}
