//! Aggregates module
pub mod product;
pub mod order;
pub mod cart;
pub mod sale;

pub use product::{Product, ProductError, Review};
pub use order::{Checkout, CheckoutError, CheckoutStatus, OrderSnapshot};
pub use cart::{Cart, CartItem};
pub use sale::{Sale, SaleError};
