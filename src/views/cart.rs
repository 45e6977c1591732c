use crate::domain::aggregates::{CartItem, CheckoutStatus, OrderSnapshot};
use crate::domain::value_objects::{Money, MoneyError};
use crate::render::{el, Document, Element, Node};
use crate::services::{CartService, CheckoutService};
use crate::views::{layout::page, product_image};
use crate::StorefrontError;

/// Cart listing, checkout prompt and order confirmation.
#[derive(Debug)]
pub struct CartPage {
    cart: CartService,
}

impl CartPage {
    pub fn new(cart: Option<CartService>) -> Result<Self, StorefrontError> {
        cart.map(|cart| Self { cart }).ok_or(StorefrontError::CartProviderMissing)
    }

    /// Shows a confirmed order once, then falls back to the live cart.
    pub fn render(&self, checkout: &CheckoutService) -> Document {
        if let Some(order) = checkout.take_confirmed() {
            return page("Order", [order_confirmation(&order)]);
        }

        let items = self.cart.cart_items();
        let mut content = el("div").class("cart-container").child(el("h2").text("Your Cart"));
        if items.is_empty() {
            return page("Cart", [Node::from(content.child(el("p").text("Your cart is empty.")))]);
        }

        content = content
            .child(item_list(&items))
            .child(total_line(self.cart.subtotal()))
            .child(
                el("form").attr("method", "post").attr("action", "/cart/checkout")
                    .child(el("button").attr("type", "submit").class("checkout-btn").text("Checkout")),
            );

        let mut main = vec![Node::from(content)];
        if checkout.status() == CheckoutStatus::ConfirmPending {
            main.push(checkout_modal());
        }
        page("Cart", main)
    }
}

fn item_list(items: &[CartItem]) -> Element {
    el("div").class("cart-items").children(items.iter().map(item_row))
}

fn item_row(item: &CartItem) -> Node {
    let mut row = el("div").class("cart-item");
    if let Some(image) = &item.image {
        row = row.child(el("img").attr("src", product_image(image)).attr("alt", item.name.as_str()));
    }
    row.child(
        el("div").class("cart-item-details")
            .child(el("h3").text(item.name.as_str()))
            .child(el("p").text(format!("Price: {}", item.unit_price)))
            .child(el("p").text(format!("Quantity: {}", item.quantity))),
    )
    .into()
}

fn total_line(total: Result<Money, MoneyError>) -> Element {
    let text = match total {
        Ok(total) => format!("Total: {total}"),
        Err(error) => {
            tracing::warn!(%error, "cart total cannot be computed");
            "Total: unavailable".to_string()
        }
    };
    el("p").class("cart-total").text(text)
}

fn order_confirmation(order: &OrderSnapshot) -> Node {
    el("div").class("order-confirmation")
        .child(el("h2").text("Your order has been processed!"))
        .child(el("p").class("order-placed").text(format!("Order placed {}", order.placed_at().format("%-m/%-d/%Y %H:%M UTC"))))
        .child(item_list(order.items()))
        .child(total_line(order.total()))
        .into()
}

/// The "are you sure" prompt shown over the cart.
pub fn checkout_modal() -> Node {
    el("div").class("modal-backdrop")
        .child(
            el("div").class("modal-content")
                .child(el("h2").text("Are you sure?"))
                .child(el("p").text("Do you want to proceed with the checkout?"))
                .child(
                    el("div").class("checkout-modal-actions")
                        .child(
                            el("form").attr("method", "post").attr("action", "/cart/checkout/confirm")
                                .child(el("button").attr("type", "submit").text("Continue Checkout")),
                        )
                        .child(
                            el("form").attr("method", "post").attr("action", "/cart/checkout/cancel")
                                .child(el("button").attr("type", "submit").class("cancel-btn").text("Return to cart")),
                        ),
                ),
        )
        .into()
}
