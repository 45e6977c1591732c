//! Order Aggregate: the checkout confirmation flow and the snapshot it produces.

use chrono::{DateTime, Utc};
use crate::domain::aggregates::cart::{subtotal, Cart, CartItem};
use crate::domain::events::{DomainEvent, OrderEvent};
use crate::domain::value_objects::{Money, MoneyError};

/// Copy of the cart taken when checkout is confirmed.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderSnapshot {
    items: Vec<CartItem>,
    placed_at: DateTime<Utc>,
}

impl OrderSnapshot {
    pub fn items(&self) -> &[CartItem] { &self.items }
    pub fn total(&self) -> Result<Money, MoneyError> { subtotal(&self.items) }
    pub fn placed_at(&self) -> DateTime<Utc> { self.placed_at }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum CheckoutStatus {
    #[default]
    Idle,
    ConfirmPending,
    Confirmed(OrderSnapshot),
}

#[derive(Clone, Debug, Default)]
pub struct Checkout {
    status: CheckoutStatus,
    events: Vec<DomainEvent>,
}

impl Checkout {
    pub fn new() -> Self { Self::default() }
    pub fn status(&self) -> &CheckoutStatus { &self.status }
    pub fn is_pending(&self) -> bool { self.status == CheckoutStatus::ConfirmPending }

    /// Opens the confirmation prompt. Only reachable with items in the cart.
    pub fn begin(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        if cart.is_empty() { return Err(CheckoutError::EmptyCart); }
        match self.status {
            CheckoutStatus::ConfirmPending => Err(CheckoutError::AlreadyPending),
            _ => {
                self.status = CheckoutStatus::ConfirmPending;
                Ok(())
            }
        }
    }

    pub fn cancel(&mut self) -> Result<(), CheckoutError> {
        if !self.is_pending() { return Err(CheckoutError::NotPending); }
        self.status = CheckoutStatus::Idle;
        self.raise_event(DomainEvent::Order(OrderEvent::Cancelled));
        Ok(())
    }

    /// Snapshots the cart, then clears it.
    pub fn confirm(&mut self, cart: &mut Cart) -> Result<OrderSnapshot, CheckoutError> {
        if !self.is_pending() { return Err(CheckoutError::NotPending); }
        let snapshot = OrderSnapshot { items: cart.take_items(), placed_at: Utc::now() };
        self.raise_event(DomainEvent::Order(OrderEvent::Confirmed {
            lines: snapshot.items.len(),
            total: snapshot.total().ok().map(|total| total.amount()),
        }));
        self.status = CheckoutStatus::Confirmed(snapshot.clone());
        Ok(snapshot)
    }

    /// Leaves the order-shown state, handing back the snapshot once.
    pub fn take_confirmed(&mut self) -> Option<OrderSnapshot> {
        match std::mem::take(&mut self.status) {
            CheckoutStatus::Confirmed(snapshot) => Some(snapshot),
            other => {
                self.status = other;
                None
            }
        }
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckoutError {
    #[error("cannot check out an empty cart")]
    EmptyCart,
    #[error("checkout confirmation is already pending")]
    AlreadyPending,
    #[error("no checkout confirmation is pending")]
    NotPending,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::Product;
    use crate::domain::value_objects::ProductId;
    use rust_decimal::Decimal;

    fn cart_with(adds: &[(&str, i64)]) -> Cart {
        let mut cart = Cart::new();
        for (id, cents) in adds {
            let p = Product::create(ProductId::new(*id).unwrap(), id.to_uppercase(), Decimal::new(*cents, 2)).unwrap();
            cart.add_to_cart(&p);
        }
        cart
    }

    #[test]
    fn test_checkout_workflow() {
        let mut cart = cart_with(&[("a", 2999), ("a", 2999), ("b", 4999)]);
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        assert!(checkout.is_pending());
        assert_eq!(cart.item_count(), 2, "begin must not touch the cart");

        let snapshot = checkout.confirm(&mut cart).unwrap();
        assert!(cart.is_empty());
        assert_eq!(snapshot.items().len(), 2);
        assert_eq!(snapshot.items()[0].quantity.value(), 2);
        assert_eq!(snapshot.items()[1].quantity.value(), 1);
        assert_eq!(snapshot.total().unwrap().amount(), Decimal::new(10997, 2));
        assert_eq!(checkout.status(), &CheckoutStatus::Confirmed(snapshot.clone()));

        cart.clear();
        assert_eq!(checkout.take_confirmed(), Some(snapshot));
        assert_eq!(checkout.status(), &CheckoutStatus::Idle);
        assert_eq!(checkout.take_confirmed(), None);
    }

    #[test]
    fn test_cancel_leaves_cart_alone() {
        let mut cart = cart_with(&[("a", 100)]);
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.cancel().unwrap();
        assert_eq!(checkout.status(), &CheckoutStatus::Idle);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(checkout.confirm(&mut cart), Err(CheckoutError::NotPending));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_invalid_transitions() {
        let empty = Cart::new();
        let mut checkout = Checkout::new();
        assert_eq!(checkout.begin(&empty), Err(CheckoutError::EmptyCart));
        assert_eq!(checkout.cancel(), Err(CheckoutError::NotPending));

        let cart = cart_with(&[("a", 100)]);
        checkout.begin(&cart).unwrap();
        assert_eq!(checkout.begin(&cart), Err(CheckoutError::AlreadyPending));
    }

    #[test]
    fn test_confirm_raises_event() {
        let mut cart = cart_with(&[("a", 1000), ("b", 500)]);
        let mut checkout = Checkout::new();
        checkout.begin(&cart).unwrap();
        checkout.confirm(&mut cart).unwrap();
        assert_eq!(
            checkout.take_events(),
            vec![DomainEvent::Order(OrderEvent::Confirmed { lines: 2, total: Some(Decimal::new(15, 0)) })]
        );
    }
}
