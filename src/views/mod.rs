//! Page views. Each builds a [`Document`](crate::render::Document) from
//! service state; none of them mutate anything except the cart page, which
//! consumes a confirmed order once it has been shown.

pub mod admin;
pub mod cart;
pub mod home;
pub mod layout;
pub mod login;
pub mod products;
pub mod reviews;

pub use cart::CartPage;
pub use products::ProductsPage;

/// Public path of a product image file.
pub fn product_image(file: &str) -> String { format!("/products/productImages/{file}") }
