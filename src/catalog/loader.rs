use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::catalog::ProductSource;
use crate::domain::aggregates::Product;

/// Fans out one fetch per product file and keeps the successes.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn ProductSource>,
    files: Vec<String>,
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader").field("files", &self.files).finish_non_exhaustive()
    }
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn ProductSource>, files: Vec<String>) -> Self { Self { source, files } }

    pub fn files(&self) -> &[String] { &self.files }

    /// Waits for every fetch to settle. A failed file is logged and skipped.
    pub async fn load(&self) -> Vec<Product> {
        let fetches = self.files.iter().map(|file| {
            let source = Arc::clone(&self.source);
            async move { (file, source.fetch(file).await) }
        });

        let settled = join_all(fetches).await;
        let requested = settled.len();

        let products: Vec<Product> = settled
            .into_iter()
            .filter_map(|(file, result)| match result {
                Ok(product) => Some(product),
                Err(error) => {
                    warn!(%file, %error, "skipping product file");
                    None
                }
            })
            .collect();

        debug!(requested, loaded = products.len(), "catalog load settled");
        products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, MockProductSource};
    use crate::domain::value_objects::ProductId;
    use rust_decimal::Decimal;

    fn product(id: &str) -> Product {
        Product::create(ProductId::new(id).unwrap(), id.to_uppercase(), Decimal::new(199, 2)).unwrap()
    }

    fn files(names: &[&str]) -> Vec<String> { names.iter().map(|s| s.to_string()).collect() }

    #[tokio::test]
    async fn test_loads_every_file() {
        let mut source = MockProductSource::new();
        source
            .expect_fetch()
            .times(4)
            .returning(|file| Ok(product(file.trim_end_matches(".json"))));

        let loader = CatalogLoader::new(Arc::new(source), files(&["apple.json", "orange.json", "grapes.json", "pear.json"]));
        let mut ids: Vec<_> = loader.load().await.iter().map(|p| p.id().to_string()).collect();
        ids.sort();
        assert_eq!(ids, ["apple", "grapes", "orange", "pear"]);
    }

    #[tokio::test]
    async fn test_partial_failure_is_not_total_failure() {
        let mut source = MockProductSource::new();
        source.expect_fetch().returning(|file| match file {
            "apple.json" | "pear.json" => Ok(product(file.trim_end_matches(".json"))),
            "orange.json" => Err(CatalogError::Status { file: file.to_string(), status: 404 }),
            _ => Err(CatalogError::InvalidIdentifier(file.to_string())),
        });

        let loader = CatalogLoader::new(Arc::new(source), files(&["apple.json", "orange.json", "grapes.json", "pear.json"]));
        let loaded = loader.load().await;
        assert_eq!(loaded.len(), 2);
        assert!(loaded.iter().any(|p| p.id().as_str() == "apple"));
        assert!(loaded.iter().any(|p| p.id().as_str() == "pear"));
    }

    #[tokio::test]
    async fn test_all_failures_yield_empty_catalog() {
        let mut source = MockProductSource::new();
        source
            .expect_fetch()
            .times(3)
            .returning(|file| Err(CatalogError::Status { file: file.to_string(), status: 500 }));

        let loader = CatalogLoader::new(Arc::new(source), files(&["a.json", "b.json", "c.json"]));
        assert!(loader.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_no_files_means_no_fetches() {
        let mut source = MockProductSource::new();
        source.expect_fetch().never();
        let loader = CatalogLoader::new(Arc::new(source), vec![]);
        assert!(loader.load().await.is_empty());
    }
}
