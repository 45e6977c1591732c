use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::services::{lock, CartService, CheckoutService, ReviewBook};

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);
pub const DEFAULT_SESSION_CAPACITY: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self { Self(Uuid::new_v4()) }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl FromStr for SessionId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> { Uuid::parse_str(s).map(Self) }
}

/// Everything one browser session owns.
#[derive(Clone, Debug, Default)]
pub struct Session {
    pub cart: CartService,
    pub checkout: CheckoutService,
    pub reviews: ReviewBook,
}

#[derive(Debug)]
struct Entry {
    session: Session,
    last_seen: Instant,
}

/// Sessions keyed by server-issued ids.
///
/// Entries idle for longer than the TTL are dropped, and when the store is
/// full the least recently seen session makes room for a new one.
#[derive(Debug)]
pub struct SessionStore {
    sessions: Mutex<HashMap<SessionId, Entry>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for SessionStore {
    fn default() -> Self { Self::new() }
}

impl SessionStore {
    pub fn new() -> Self { Self::with_limits(DEFAULT_SESSION_TTL, DEFAULT_SESSION_CAPACITY) }

    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self { sessions: Mutex::new(HashMap::new()), ttl, capacity: capacity.max(1) }
    }

    /// The live session for `id`, refreshing its idle timer. Unknown and
    /// expired ids yield `None`.
    pub fn get(&self, id: SessionId) -> Option<Session> { self.get_at(id, Instant::now()) }

    /// Starts a new session under a freshly generated id.
    pub fn create(&self) -> (SessionId, Session) { self.create_at(Instant::now()) }

    pub fn len(&self) -> usize { lock(&self.sessions).len() }
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    fn get_at(&self, id: SessionId, now: Instant) -> Option<Session> {
        let mut sessions = lock(&self.sessions);
        let entry = sessions.get_mut(&id)?;
        if now.saturating_duration_since(entry.last_seen) > self.ttl {
            sessions.remove(&id);
            tracing::debug!(session = %id, "session expired");
            return None;
        }
        entry.last_seen = now;
        Some(entry.session.clone())
    }

    fn create_at(&self, now: Instant) -> (SessionId, Session) {
        let mut sessions = lock(&self.sessions);

        let before = sessions.len();
        sessions.retain(|_, entry| now.saturating_duration_since(entry.last_seen) <= self.ttl);
        if sessions.len() < before {
            tracing::debug!(expired = before - sessions.len(), "expired sessions swept");
        }

        if sessions.len() >= self.capacity {
            let oldest = sessions.iter().min_by_key(|(_, entry)| entry.last_seen).map(|(id, _)| *id);
            if let Some(oldest) = oldest {
                sessions.remove(&oldest);
                tracing::debug!(session = %oldest, "session evicted at capacity");
            }
        }

        let id = SessionId::generate();
        let session = Session::default();
        sessions.insert(id, Entry { session: session.clone(), last_seen: now });
        tracing::debug!(session = %id, "session created");
        (id, session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::Product;
    use crate::domain::value_objects::ProductId;
    use rust_decimal::Decimal;

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let (a, first) = store.create();
        let (b, _) = store.create();
        let apple = Product::create(ProductId::new("1").unwrap(), "Apple", Decimal::new(199, 2)).unwrap();

        first.cart.add_to_cart(&apple);
        assert_eq!(store.get(a).unwrap().cart.item_count(), 1);
        assert!(store.get(b).unwrap().cart.is_empty());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_only_issued_ids_resolve() {
        let store = SessionStore::new();
        assert!(store.get(SessionId::generate()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_idle_sessions_expire() {
        let store = SessionStore::with_limits(Duration::from_secs(60), 100);
        let start = Instant::now();
        let (kept, _) = store.create_at(start);
        let (idle, _) = store.create_at(start);

        assert!(store.get_at(kept, start + Duration::from_secs(50)).is_some());
        assert!(store.get_at(idle, start + Duration::from_secs(61)).is_none());
        assert_eq!(store.len(), 1);

        store.create_at(start + Duration::from_secs(200));
        assert_eq!(store.len(), 1, "stale sessions are swept when a new one starts");
        assert!(store.get_at(kept, start + Duration::from_secs(200)).is_none());
    }

    #[test]
    fn test_capacity_evicts_least_recently_seen() {
        let store = SessionStore::with_limits(Duration::from_secs(3600), 2);
        let start = Instant::now();
        let (a, _) = store.create_at(start);
        let (b, _) = store.create_at(start + Duration::from_secs(1));
        store.get_at(a, start + Duration::from_secs(2));

        let (c, _) = store.create_at(start + Duration::from_secs(3));
        assert_eq!(store.len(), 2);
        assert!(store.get_at(b, start + Duration::from_secs(4)).is_none());
        assert!(store.get_at(a, start + Duration::from_secs(4)).is_some());
        assert!(store.get_at(c, start + Duration::from_secs(4)).is_some());
    }

    #[test]
    fn test_session_id_round_trips_through_text() {
        let id = SessionId::generate();
        assert_eq!(id.to_string().parse::<SessionId>().unwrap(), id);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }
}
