//! Environment configuration

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::catalog::{CatalogLoader, DirectoryProductSource, HttpProductSource, ProductSource};
use crate::services::session::{SessionStore, DEFAULT_SESSION_CAPACITY, DEFAULT_SESSION_TTL};

pub const DEFAULT_CATALOG_FILES: &[&str] = &["apple.json", "orange.json", "grapes.json", "pear.json"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Directory(PathBuf),
    Http(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub catalog_source: CatalogSource,
    pub catalog_files: Vec<String>,
    pub static_dir: PathBuf,
    pub session_ttl: Duration,
    pub session_capacity: usize,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid PORT {0:?}")]
    InvalidPort(String),
    #[error("CATALOG_FILES lists no files")]
    NoCatalogFiles,
    #[error("invalid {0} {1:?}")]
    InvalidNumber(&'static str, String),
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port: u16 = match get("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8083,
        };

        let catalog_source = match get("CATALOG_BASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(url) => CatalogSource::Http(url),
            None => CatalogSource::Directory(get("CATALOG_DIR").unwrap_or_else(|| "public/products".into()).into()),
        };

        let catalog_files: Vec<String> = match get("CATALOG_FILES") {
            Some(list) => list.split(',').map(str::trim).filter(|f| !f.is_empty()).map(String::from).collect(),
            None => DEFAULT_CATALOG_FILES.iter().map(|f| f.to_string()).collect(),
        };
        if catalog_files.is_empty() {
            return Err(ConfigError::NoCatalogFiles);
        }

        let session_ttl = match get("SESSION_TTL_SECS") {
            Some(raw) => Duration::from_secs(raw.trim().parse().map_err(|_| ConfigError::InvalidNumber("SESSION_TTL_SECS", raw))?),
            None => DEFAULT_SESSION_TTL,
        };
        let session_capacity: usize = match get("SESSION_CAPACITY") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidNumber("SESSION_CAPACITY", raw))?,
            None => DEFAULT_SESSION_CAPACITY,
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port,
            catalog_source,
            catalog_files,
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "public/products/productImages".into()).into(),
            session_ttl,
            session_capacity,
        })
    }

    pub fn socket_addr(&self) -> String { format!("{}:{}", self.host, self.port) }

    pub fn catalog_loader(&self) -> CatalogLoader {
        let source: Arc<dyn ProductSource> = match &self.catalog_source {
            CatalogSource::Directory(dir) => Arc::new(DirectoryProductSource::new(dir.clone())),
            CatalogSource::Http(url) => Arc::new(HttpProductSource::new(url.clone())),
        };
        CatalogLoader::new(source, self.catalog_files.clone())
    }

    pub fn session_store(&self) -> SessionStore { SessionStore::with_limits(self.session_ttl, self.session_capacity) }
}
