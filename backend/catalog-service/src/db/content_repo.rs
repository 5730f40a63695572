use crate::error::Result;
use crate::models::Content;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// Read access to the content catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Every stored content row, ordered by id.
    async fn find_all(&self) -> Result<Vec<Content>>;

    /// Rows whose genre equals `genre` exactly (case-sensitive, untrimmed).
    /// Returns an empty vector when nothing matches.
    async fn find_by_genre(&self, genre: &str) -> Result<Vec<Content>>;
}

/// PostgreSQL-backed content repository
#[derive(Clone)]
pub struct PgContentRepository {
    pool: PgPool,
}

impl PgContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn find_all(&self) -> Result<Vec<Content>> {
        let rows = sqlx::query_as::<_, Content>(
            r#"
            SELECT content_id, title, description, genre, release_date, rating,
                   thumbnail_url, video_url
            FROM content
            ORDER BY content_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "Loaded full catalog");
        Ok(rows)
    }

    async fn find_by_genre(&self, genre: &str) -> Result<Vec<Content>> {
        let rows = sqlx::query_as::<_, Content>(
            r#"
            SELECT content_id, title, description, genre, release_date, rating,
                   thumbnail_url, video_url
            FROM content
            WHERE genre = $1
            ORDER BY content_id
            "#,
        )
        .bind(genre)
        .fetch_all(&self.pool)
        .await?;

        debug!(%genre, count = rows.len(), "Loaded catalog by genre");
        Ok(rows)
    }
}
