use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A catalog item. Rows are written by the ingestion side; this service only reads them.
///
/// Serialized with the key under both `id` and `content_id`; the web client
/// addresses records by `content_id`.
#[derive(Debug, Clone, PartialEq, Deserialize, FromRow, ToSchema)]
pub struct Content {
    #[sqlx(rename = "content_id")]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Exact-match filter key
    pub genre: String,
    pub release_date: Option<NaiveDate>,
    pub rating: Option<f64>,
    pub thumbnail_url: Option<String>,
    pub video_url: Option<String>,
}

impl Serialize for Content {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Content", 9)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("content_id", &self.id)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("description", &self.description)?;
        state.serialize_field("genre", &self.genre)?;
        state.serialize_field("release_date", &self.release_date)?;
        state.serialize_field("rating", &self.rating)?;
        state.serialize_field("thumbnail_url", &self.thumbnail_url)?;
        state.serialize_field("video_url", &self.video_url)?;
        state.end()
    }
}
