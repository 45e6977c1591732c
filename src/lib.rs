//! The Daily Harvest storefront
//!
//! A small server-rendered shop with in-memory state only.
//!
//! ## Features
//! - Product catalog assembled from independent product files
//! - Shopping cart with merge-by-product quantities
//! - Two-step checkout with an order confirmation snapshot
//! - Mock admin login and sale-percent administration
//! - Session-local product reviews

pub mod catalog;
pub mod config;
pub mod domain;
pub mod render;
pub mod services;
pub mod views;
pub mod web;

use thiserror::Error;

use crate::domain::aggregates::CheckoutError;
use crate::domain::value_objects::ProductIdError;

pub use crate::domain::aggregates::{CartItem, OrderSnapshot, Product, Review};

// =============================================================================
// Error Types
// =============================================================================

#[derive(Error, Debug)]
pub enum StorefrontError {
    /// A cart-aware view was built without a cart handle. Wiring defect.
    #[error("cart-aware view constructed outside a cart provider scope")]
    CartProviderMissing,

    #[error("Product not found")]
    ProductNotFound,

    #[error("Product is out of stock")]
    OutOfStock,

    #[error("Invalid product id: {0}")]
    InvalidProductId(#[from] ProductIdError),

    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
