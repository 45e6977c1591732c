use crate::catalog::CatalogState;
use crate::domain::aggregates::Product;
use crate::render::{el, Document, Element, Node};
use crate::services::{CartService, ReviewBook};
use crate::views::{layout::page, product_image};
use crate::StorefrontError;

/// Catalog listing with add-to-cart controls.
#[derive(Debug)]
pub struct ProductsPage {
    cart: CartService,
}

impl ProductsPage {
    pub fn new(cart: Option<CartService>) -> Result<Self, StorefrontError> {
        cart.map(|cart| Self { cart }).ok_or(StorefrontError::CartProviderMissing)
    }

    pub fn render(&self, catalog: &CatalogState, reviews: &ReviewBook) -> Document {
        if catalog.is_loading() {
            return page("Products", [Node::from(el("p").class("loading").text("Loading products..."))]);
        }

        let in_cart = self.cart.item_count();
        let cards = catalog.products().iter().map(|p| card(p, reviews.reviews_for(p).len()));

        let listing = el("div").class("products-container")
            .child(el("h2").text("Our Products"))
            .child(el("p").class("cart-summary").text(match in_cart {
                1 => "1 product in your cart".to_string(),
                n => format!("{n} products in your cart"),
            }))
            .child(el("div").class("products-grid").children(cards));

        page("Products", [Node::from(listing)])
    }
}

fn card(product: &Product, review_count: usize) -> Node {
    let mut card = el("div").class("product-card");
    if let Some(image) = product.image() {
        card = card.child(el("img").attr("src", product_image(image)).attr("alt", product.name()));
    }
    card = card
        .child(el("h3").text(product.name()))
        .child(el("p").class("price").text(product.price().to_string()));
    if let Some(description) = product.description() {
        card = card.child(el("p").class("description").text(description));
    }
    card.child(stock_label(product.is_in_stock()))
        .child(
            el("form").attr("method", "post").attr("action", "/cart/items")
                .child(el("input").attr("type", "hidden").attr("name", "product_id").attr("value", product.id().as_str()))
                .child(el("button").attr("type", "submit").flag_if("disabled", !product.is_in_stock()).text("Add to Cart")),
        )
        .child(el("a").class("reviews-link").attr("href", format!("/reviews/{}", product.id())).text(format!("Reviews ({review_count})")))
        .into()
}

fn stock_label(in_stock: bool) -> Element {
    if in_stock {
        el("p").class("in-stock").text("In stock")
    } else {
        el("p").class("out-of-stock").text("Out of stock")
    }
}
