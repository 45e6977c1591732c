//! Per-browser session cookie.
//!
//! Every storefront request passes through [`attach`], which installs a
//! [`SessionScope`] as a request extension. Reads go through
//! [`SessionScope::view`] and never allocate a stored session; only
//! [`SessionScope::ensure`], used by handlers that change shopper state,
//! creates one and makes the layer send the cookie. A handler mounted outside
//! this layer finds no scope and reports a wiring defect.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
};

use crate::services::{lock, Session, SessionId, SessionStore};

pub const COOKIE_NAME: &str = "harvest_session";

/// The caller's session, resolved lazily.
#[derive(Clone, Debug)]
pub struct SessionScope {
    store: Arc<SessionStore>,
    state: Arc<Mutex<ScopeState>>,
}

#[derive(Debug, Default)]
struct ScopeState {
    current: Option<Session>,
    issued: Option<SessionId>,
}

impl SessionScope {
    pub fn new(store: Arc<SessionStore>, current: Option<Session>) -> Self {
        Self { store, state: Arc::new(Mutex::new(ScopeState { current, issued: None })) }
    }

    /// The caller's session, or a throwaway empty one for a caller without.
    pub fn view(&self) -> Session { lock(&self.state).current.clone().unwrap_or_default() }

    /// The caller's session, starting a stored one if there is none yet.
    pub fn ensure(&self) -> Session {
        let mut state = lock(&self.state);
        if let Some(session) = &state.current {
            return session.clone();
        }
        let (id, session) = self.store.create();
        state.current = Some(session.clone());
        state.issued = Some(id);
        session
    }

    /// Id started during this request, if any.
    pub fn issued(&self) -> Option<SessionId> { lock(&self.state).issued }
}

pub async fn attach(State(sessions): State<Arc<SessionStore>>, mut request: Request, next: Next) -> Response {
    let current = session_cookie(request.headers()).and_then(|id| sessions.get(id));
    let scope = SessionScope::new(sessions, current);
    request.extensions_mut().insert(scope.clone());

    let mut response = next.run(request).await;
    if let Some(id) = scope.issued() {
        match HeaderValue::from_str(&format!("{COOKIE_NAME}={id}; Path=/; HttpOnly; SameSite=Lax")) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(error) => tracing::error!(%error, "session cookie not representable"),
        }
    }
    response
}

/// The session id carried by the request's cookies, if it parses.
pub fn session_cookie(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .and_then(|(_, value)| value.parse().ok())
}
