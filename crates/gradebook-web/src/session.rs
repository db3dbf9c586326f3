//! Server-side login sessions.
//!
//! The browser only holds a random token in a cookie; role and username stay
//! in memory on the server and are lost on restart. Sessions expire after
//! `max_age`, and the store never holds more than `max_sessions` entries.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::COOKIE;
use axum::http::request::Parts;
use axum::response::Redirect;
use chrono::{DateTime, Duration, Utc};
use gradebook_core::Role;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::AppState;

pub const DEFAULT_MAX_AGE_HOURS: i64 = 8;
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub role: Role,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<String, Session>>>,
    max_age: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(Duration::hours(DEFAULT_MAX_AGE_HOURS), DEFAULT_MAX_SESSIONS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(max_age: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_age,
            max_sessions: max_sessions.max(1),
        }
    }

    fn is_live(&self, session: &Session, now: DateTime<Utc>) -> bool {
        now - session.created_at < self.max_age
    }

    /// Start a session and return its token.
    ///
    /// Expired sessions are swept first; if the store is still full the
    /// oldest session is evicted.
    pub async fn create(&self, role: Role, username: &str) -> String {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, session| self.is_live(session, now));

        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, session)| session.created_at)
                .map(|(token, _)| token.clone())
            else {
                break;
            };
            sessions.remove(&oldest);
        }

        let token = Uuid::new_v4().to_string();
        let session = Session {
            role,
            username: username.to_string(),
            created_at: now,
        };
        sessions.insert(token.clone(), session);
        token
    }

    /// Look up a live session; an expired one is dropped
    pub async fn get(&self, token: &str) -> Option<Session> {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;
        match sessions.get(token) {
            Some(session) if self.is_live(session, now) => Some(session.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    pub async fn remove(&self, token: &str) -> Option<Session> {
        self.sessions.lock().await.remove(token)
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}

/// Find the value of cookie `name` in the request headers
pub fn token_from_headers(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

pub fn session_cookie(name: &str, token: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", name, token)
}

pub fn expired_cookie(name: &str) -> String {
    format!("{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0", name)
}

async fn session_with_role(parts: &Parts, state: &AppState, role: Role) -> Option<Session> {
    let token = token_from_headers(&parts.headers, &state.cookie_name)?;
    state
        .sessions
        .get(&token)
        .await
        .filter(|session| session.role == role)
}

/// Extractor for a logged-in admin; anyone else is sent to the login page.
pub struct AdminSession(pub Session);

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_with_role(parts, state, Role::Admin)
            .await
            .map(Self)
            .ok_or_else(|| Redirect::to("/"))
    }
}

/// Extractor for a logged-in student; anyone else is sent to the login page.
pub struct StudentSession(pub Session);

impl FromRequestParts<AppState> for StudentSession {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        session_with_role(parts, state, Role::Student)
            .await
            .map(Self)
            .ok_or_else(|| Redirect::to("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[tokio::test]
    async fn test_session_lifecycle() {
        let store = SessionStore::new();
        let token = store.create(Role::Student, "alice").await;

        let session = store.get(&token).await.unwrap();
        assert_eq!(session.role, Role::Student);
        assert_eq!(session.username, "alice");
        assert_eq!(store.len().await, 1);

        assert!(store.remove(&token).await.is_some());
        assert!(store.get(&token).await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_expired_sessions_are_dropped() {
        let store = SessionStore::with_limits(Duration::zero(), 100);
        let token = store.create(Role::Student, "alice").await;
        assert!(store.get(&token).await.is_none());
        assert!(store.is_empty().await);

        store.create(Role::Student, "alice").await;
        store.create(Role::Student, "alice").await;
        // Each create sweeps the ones before it
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_store_is_capped() {
        let store = SessionStore::with_limits(Duration::hours(1), 3);
        for _ in 0..10 {
            store.create(Role::Admin, "admin").await;
        }
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_tokens_are_unique() {
        let store = SessionStore::new();
        let a = store.create(Role::Admin, "admin").await;
        let b = store.create(Role::Admin, "admin").await;
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; gradebook_session=abc-123; other=1"),
        );
        assert_eq!(
            token_from_headers(&headers, "gradebook_session"),
            Some("abc-123".to_string())
        );
        assert_eq!(token_from_headers(&headers, "missing"), None);
        assert_eq!(token_from_headers(&HeaderMap::new(), "gradebook_session"), None);
    }

    #[test]
    fn test_cookie_formatting() {
        assert_eq!(
            session_cookie("sid", "tok"),
            "sid=tok; Path=/; HttpOnly; SameSite=Lax"
        );
        assert!(expired_cookie("sid").starts_with("sid=;"));
        assert!(expired_cookie("sid").ends_with("Max-Age=0"));
    }
}
