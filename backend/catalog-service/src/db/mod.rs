/// Database access layer
///
/// - `ContentRepository`: the two catalog reads (full scan, genre filter)
/// - `UserRepository`: default reads over the `users` table
/// - Embedded schema migrations
mod content_repo;
mod user_repo;

pub use content_repo::{ContentRepository, PgContentRepository};
pub use user_repo::{PgUserRepository, UserRepository};

#[cfg(test)]
pub use content_repo::MockContentRepository;

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;

/// Schema for the `content` and `users` tables.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::debug!("Running catalog migrations");
    MIGRATOR.run(pool).await
}
