use std::sync::{Arc, Mutex};

use crate::domain::aggregates::{Cart, CartItem, Product};
use crate::domain::value_objects::{Money, MoneyError};
use crate::services::{lock, publish};

/// Handle to one shopper's cart.
#[derive(Clone, Debug, Default)]
pub struct CartService {
    cart: Arc<Mutex<Cart>>,
}

impl CartService {
    pub fn new() -> Self { Self::default() }

    pub fn add_to_cart(&self, product: &Product) {
        let mut cart = lock(&self.cart);
        cart.add_to_cart(product);
        publish(cart.take_events());
    }

    pub fn clear_cart(&self) {
        let mut cart = lock(&self.cart);
        cart.clear();
        publish(cart.take_events());
    }

    /// Current items, first added first.
    pub fn cart_items(&self) -> Vec<CartItem> { lock(&self.cart).items().to_vec() }

    pub fn item_count(&self) -> usize { lock(&self.cart).item_count() }
    pub fn is_empty(&self) -> bool { lock(&self.cart).is_empty() }
    pub fn subtotal(&self) -> Result<Money, MoneyError> { lock(&self.cart).subtotal() }

    /// Runs `f` with exclusive access to the cart.
    pub(crate) fn with_cart<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        let mut cart = lock(&self.cart);
        let result = f(&mut cart);
        publish(cart.take_events());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ProductId;
    use rust_decimal::Decimal;

    fn product(id: &str, cents: i64) -> Product {
        Product::create(ProductId::new(id).unwrap(), format!("Test Product {id}"), Decimal::new(cents, 2)).unwrap()
    }

    #[test]
    fn test_clones_share_state() {
        let cart = CartService::new();
        let view = cart.clone();
        assert!(view.is_empty());

        cart.add_to_cart(&product("test-1", 1000));
        cart.add_to_cart(&product("test-1", 1000));
        cart.add_to_cart(&product("test-2", 2000));
        assert_eq!(view.item_count(), 2);
        assert_eq!(view.cart_items()[0].quantity.value(), 2);
        assert_eq!(view.subtotal().unwrap().amount(), Decimal::new(40, 0));

        view.clear_cart();
        assert!(cart.cart_items().is_empty());
    }

    #[test]
    fn test_items_are_copies() {
        let cart = CartService::new();
        cart.add_to_cart(&product("a", 100));
        let items = cart.cart_items();
        cart.clear_cart();
        assert_eq!(items.len(), 1);
    }
}
