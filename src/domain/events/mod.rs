//! Domain events
use crate::domain::value_objects::{ProductId, Quantity, SalePercent};
use rust_decimal::Decimal;

#[derive(Clone, Debug, PartialEq)]
pub enum DomainEvent {
    Cart(CartEvent),
    Order(OrderEvent),
    Sale(SaleEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub enum CartEvent {
    ItemAdded { product_id: ProductId, quantity: Quantity },
    Cleared { items_removed: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub enum OrderEvent {
    /// `total` is `None` when the order total is out of range.
    Confirmed { lines: usize, total: Option<Decimal> },
    Cancelled,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SaleEvent {
    Started { percent: SalePercent },
    Ended,
}

impl DomainEvent {
    /// Emits the event on the `events` tracing target.
    pub fn log(&self) {
        match self {
            Self::Cart(CartEvent::ItemAdded { product_id, quantity }) => {
                tracing::info!(target: "events", %product_id, %quantity, "cart item added")
            }
            Self::Cart(CartEvent::Cleared { items_removed }) => {
                tracing::info!(target: "events", items_removed, "cart cleared")
            }
            Self::Order(OrderEvent::Confirmed { lines, total }) => {
                tracing::info!(target: "events", lines, total = ?total, "order confirmed")
            }
            Self::Order(OrderEvent::Cancelled) => tracing::info!(target: "events", "checkout cancelled"),
            Self::Sale(SaleEvent::Started { percent }) => {
                tracing::info!(target: "events", %percent, "sale percent set")
            }
            Self::Sale(SaleEvent::Ended) => tracing::info!(target: "events", "sale ended"),
        }
    }
}
