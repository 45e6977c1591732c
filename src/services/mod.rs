//! Shared handles over the domain aggregates.
//!
//! Each service is a cheap, cloneable handle. Clones share the same state, so
//! a view handed a [`CartService`] sees every mutation made through any other
//! clone immediately. Mutations run to completion under the handle's lock and
//! drain the aggregate's domain events into the log before returning.

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod reviews;
pub mod sale;
pub mod session;

pub use auth::{LoginForm, LoginOutcome};
pub use cart::CartService;
pub use checkout::CheckoutService;
pub use reviews::ReviewBook;
pub use sale::SaleService;
pub use session::{Session, SessionId, SessionStore};

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::events::DomainEvent;

/// Locks `mutex`, recovering the state if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn publish(events: Vec<DomainEvent>) {
    for event in &events {
        event.log();
    }
}
