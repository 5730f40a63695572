/// Business logic layer for catalog-service
///
/// The catalog service is a pass-through over the content repository.
pub mod catalog;

pub use catalog::CatalogService;
