//! Where product files come from.

use std::path::PathBuf;

use async_trait::async_trait;
use mockall::automock;

use crate::catalog::CatalogError;
use crate::domain::aggregates::Product;

/// Resolves one product file identifier (e.g. `apple.json`) to a product.
#[automock]
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch(&self, file: &str) -> Result<Product, CatalogError>;
}

/// Fetches `{base_url}/{file}` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn url(&self, file: &str) -> String { format!("{}/{}", self.base_url, file) }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch(&self, file: &str) -> Result<Product, CatalogError> {
        let url = self.url(file);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogError::Transport { file: file.to_string(), source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { file: file.to_string(), status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogError::Transport { file: file.to_string(), source })?;

        super::decode(file, &body)
    }
}

/// Reads product files from a local directory.
#[derive(Debug, Clone)]
pub struct DirectoryProductSource {
    root: PathBuf,
}

impl DirectoryProductSource {
    pub fn new(root: impl Into<PathBuf>) -> Self { Self { root: root.into() } }
}

#[async_trait]
impl ProductSource for DirectoryProductSource {
    async fn fetch(&self, file: &str) -> Result<Product, CatalogError> {
        if file.contains(['/', '\\']) || file.starts_with('.') {
            return Err(CatalogError::InvalidIdentifier(file.to_string()));
        }
        let body = tokio::fs::read(self.root.join(file))
            .await
            .map_err(|source| CatalogError::Io { file: file.to_string(), source })?;

        super::decode(file, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_url_joins_without_double_slash() {
        let source = HttpProductSource::new("http://localhost:8083/products/");
        assert_eq!(source.url("apple.json"), "http://localhost:8083/products/apple.json");
    }

    #[tokio::test]
    async fn test_directory_source_reads_and_decodes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pear.json"), r#"{"id": "4", "name": "Pear", "price": 2.29, "reviews": [], "inStock": true}"#).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ not json").unwrap();
        let source = DirectoryProductSource::new(dir.path());

        let pear = source.fetch("pear.json").await.unwrap();
        assert_eq!(pear.name(), "Pear");

        assert!(matches!(source.fetch("broken.json").await, Err(CatalogError::Decode { .. })));
        assert!(matches!(source.fetch("missing.json").await, Err(CatalogError::Io { .. })));
        assert!(matches!(source.fetch("../pear.json").await, Err(CatalogError::InvalidIdentifier(_))));
    }
}
