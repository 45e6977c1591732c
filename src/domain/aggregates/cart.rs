//! Cart Aggregate

use crate::domain::aggregates::Product;
use crate::domain::events::{CartEvent, DomainEvent};
use crate::domain::value_objects::{Money, MoneyError, ProductId, Quantity};

#[derive(Clone, Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    events: Vec<DomainEvent>,
}

/// A product projected into the cart.
#[derive(Clone, Debug, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub image: Option<String>,
    pub quantity: Quantity,
}

impl CartItem {
    pub fn line_total(&self) -> Result<Money, MoneyError> { self.unit_price.multiply(self.quantity.value()) }
}

impl From<&Product> for CartItem {
    fn from(product: &Product) -> Self {
        Self {
            product_id: product.id().clone(),
            name: product.name().to_string(),
            unit_price: product.price(),
            image: product.image().map(str::to_string),
            quantity: Quantity::ONE,
        }
    }
}

impl Cart {
    pub fn new() -> Self { Self::default() }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] { &self.items }
    pub fn item_count(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn add_to_cart(&mut self, product: &Product) {
        let quantity = match self.items.iter_mut().find(|i| &i.product_id == product.id()) {
            Some(existing) => {
                existing.quantity = existing.quantity.increment();
                existing.quantity
            }
            None => {
                self.items.push(CartItem::from(product));
                Quantity::ONE
            }
        };
        self.raise_event(DomainEvent::Cart(CartEvent::ItemAdded { product_id: product.id().clone(), quantity }));
    }

    pub fn clear(&mut self) { self.take_items(); }

    /// Empties the cart, handing back what it held.
    pub fn take_items(&mut self) -> Vec<CartItem> {
        let items = std::mem::take(&mut self.items);
        self.raise_event(DomainEvent::Cart(CartEvent::Cleared { items_removed: items.len() }));
        items
    }

    pub fn subtotal(&self) -> Result<Money, MoneyError> { subtotal(&self.items) }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}

/// Sum of `unit_price × quantity` over the given lines.
pub fn subtotal(items: &[CartItem]) -> Result<Money, MoneyError> {
    items.iter().try_fold(Money::default(), |acc, item| acc.add(&item.line_total()?))
}
