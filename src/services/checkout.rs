use std::sync::{Arc, Mutex};

use crate::domain::aggregates::{Checkout, CheckoutError, CheckoutStatus, OrderSnapshot};
use crate::services::{lock, publish, CartService};

/// Handle to one shopper's checkout flow.
///
/// Always locks the checkout before the cart.
#[derive(Clone, Debug, Default)]
pub struct CheckoutService {
    checkout: Arc<Mutex<Checkout>>,
}

impl CheckoutService {
    pub fn new() -> Self { Self::default() }

    pub fn status(&self) -> CheckoutStatus { lock(&self.checkout).status().clone() }

    pub fn begin(&self, cart: &CartService) -> Result<(), CheckoutError> {
        let mut checkout = lock(&self.checkout);
        cart.with_cart(|cart| checkout.begin(cart))
    }

    pub fn cancel(&self) -> Result<(), CheckoutError> {
        let mut checkout = lock(&self.checkout);
        let result = checkout.cancel();
        publish(checkout.take_events());
        result
    }

    pub fn confirm(&self, cart: &CartService) -> Result<OrderSnapshot, CheckoutError> {
        let mut checkout = lock(&self.checkout);
        let result = cart.with_cart(|cart| checkout.confirm(cart));
        publish(checkout.take_events());
        result
    }

    /// The confirmed order, handed out once; afterwards the flow is idle again.
    pub fn take_confirmed(&self) -> Option<OrderSnapshot> { lock(&self.checkout).take_confirmed() }
}
