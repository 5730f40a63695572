/// Data models for catalog-service
///
/// - Content: a catalog item, filtered by genre
/// - User: subscriber account record, stored but not served over HTTP
mod content;
mod user;

pub use content::Content;
pub use user::{SubscriptionStatus, User};
