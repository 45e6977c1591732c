//! Product catalog: fetching product files and publishing the loaded list.
//!
//! Every product lives in its own JSON file. The [`CatalogLoader`] fetches all
//! of them concurrently and keeps whatever succeeded; the [`CatalogStore`]
//! exposes the `Loading`/`Loaded` state to the pages that render it.

mod loader;
mod source;
mod store;

pub use loader::CatalogLoader;
pub use source::{DirectoryProductSource, HttpProductSource, MockProductSource, ProductSource};
pub use store::{CatalogState, CatalogStore};

use thiserror::Error;

use crate::domain::aggregates::{Product, ProductError};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("invalid product file identifier {0:?}")]
    InvalidIdentifier(String),

    #[error("failed to fetch {file}: {source}")]
    Transport { file: String, #[source] source: reqwest::Error },

    #[error("failed to fetch {file}: status {status}")]
    Status { file: String, status: u16 },

    #[error("failed to read {file}: {source}")]
    Io { file: String, #[source] source: std::io::Error },

    #[error("malformed product file {file}: {source}")]
    Decode { file: String, #[source] source: serde_json::Error },

    #[error("invalid product in {file}: {source}")]
    Invalid { file: String, #[source] source: ProductError },
}

fn decode(file: &str, body: &[u8]) -> Result<Product, CatalogError> {
    let product: Product = serde_json::from_slice(body)
        .map_err(|source| CatalogError::Decode { file: file.to_string(), source })?;
    product
        .validate()
        .map_err(|source| CatalogError::Invalid { file: file.to_string(), source })?;
    Ok(product)
}
