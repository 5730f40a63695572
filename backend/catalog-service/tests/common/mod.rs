//! Shared fixtures for catalog-service integration tests.

use async_trait::async_trait;
use catalog_service::db::ContentRepository;
use catalog_service::error::{AppError, Result};
use catalog_service::models::Content;

/// Vector-backed repository with the same filter semantics as the SQL one.
pub struct InMemoryContentRepository {
    rows: Vec<Content>,
    unavailable: bool,
}

impl InMemoryContentRepository {
    pub fn new(rows: Vec<Content>) -> Self {
        Self {
            rows,
            unavailable: false,
        }
    }

    /// A repository whose every call fails as if the pool had timed out.
    pub fn unavailable() -> Self {
        Self {
            rows: Vec::new(),
            unavailable: true,
        }
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(AppError::from(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn find_all(&self) -> Result<Vec<Content>> {
        self.check()?;
        Ok(self.rows.clone())
    }

    async fn find_by_genre(&self, genre: &str) -> Result<Vec<Content>> {
        self.check()?;
        Ok(self
            .rows
            .iter()
            .filter(|c| c.genre == genre)
            .cloned()
            .collect())
    }
}

pub fn content(id: i64, genre: &str) -> Content {
    Content {
        id,
        title: format!("Title {}", id),
        description: Some(format!("Description {}", id)),
        genre: genre.to_string(),
        release_date: None,
        rating: Some(7.5),
        thumbnail_url: Some(format!("/movies/{}.jpg", id)),
        video_url: None,
    }
}

/// `{1, Action}, {2, Comedy}, {3, Action}`
pub fn sample_catalog() -> Vec<Content> {
    vec![content(1, "Action"), content(2, "Comedy"), content(3, "Action")]
}
