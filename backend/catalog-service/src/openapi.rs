/// OpenAPI documentation for the catalog API
use crate::handlers::content;
use crate::models::Content;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Elmflix Catalog Service API",
        version = "1.0.0",
        description = "Read-only access to the streaming catalog: list every title or filter by genre.",
        license(name = "MIT")
    ),
    paths(content::get_all_content, content::get_content_by_genre),
    components(schemas(Content)),
    tags(
        (name = "content", description = "Catalog listing and genre filtering"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn openapi_json_path() -> &'static str {
        "/api/openapi.json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_both_content_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/content"));
        assert!(doc.paths.paths.contains_key("/api/content/genre/{genre}"));
    }
}
