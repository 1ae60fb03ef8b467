//! Per-client sessions for the web form
//!
//! Each browser gets its own display slot, identified by a UUID carried in a
//! cookie:
//! - 30-minute idle timeout
//! - 50 concurrent session limit
//! - expired sessions are swept whenever a new one is created

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::session::Session;

/// Name of the cookie holding the session id
pub const SESSION_COOKIE: &str = "insights_session";

/// One client's display slot plus its expiry
#[derive(Debug, Clone)]
struct ClientSession {
    session: Arc<Mutex<Session>>,
    expires_at: DateTime<Utc>,
}

impl ClientSession {
    fn new(idle_timeout: Duration) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            expires_at: Utc::now() + idle_timeout,
        }
    }

    fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    fn touch(&mut self, idle_timeout: Duration) {
        self.expires_at = Utc::now() + idle_timeout;
    }
}

/// Session handle resolved for one request
#[derive(Debug, Clone)]
pub struct ClientHandle {
    pub id: Uuid,
    pub session: Arc<Mutex<Session>>,
    /// Set when the session was created for this request and the cookie must be sent
    pub created: bool,
}

impl ClientHandle {
    /// `Set-Cookie` value for a freshly created session
    pub fn set_cookie(&self) -> Option<String> {
        self.created
            .then(|| format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self.id))
    }
}

/// Thread-safe store of client sessions
///
/// The map lock is only held to look up or insert an entry. Work on a single
/// session, such as a provider fetch, locks that session alone.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, ClientSession>>>,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(max_sessions: usize) -> Self {
        Self::with_idle_timeout(max_sessions, Duration::minutes(30))
    }

    pub fn with_idle_timeout(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
            idle_timeout,
        }
    }

    /// Look up a live session and extend its expiry
    ///
    /// An expired session is removed and reported as missing.
    pub async fn get_session(&self, id: Uuid) -> Option<Arc<Mutex<Session>>> {
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(&id) {
            Some(entry) if entry.is_expired() => {
                sessions.remove(&id);
                tracing::debug!(session_id = %id, "Session expired");
                None
            }
            Some(entry) => {
                entry.touch(self.idle_timeout);
                Some(Arc::clone(&entry.session))
            }
            None => None,
        }
    }

    /// Create and store an empty session
    ///
    /// # Errors
    /// - `SessionLimitExceeded` if `max_sessions` live sessions already exist
    pub async fn create_session(&self) -> Result<(Uuid, Arc<Mutex<Session>>), SessionError> {
        let mut sessions = self.sessions.write().await;

        sessions.retain(|_, entry| !entry.is_expired());
        if sessions.len() >= self.max_sessions {
            return Err(SessionError::SessionLimitExceeded(self.max_sessions));
        }

        let id = Uuid::new_v4();
        let entry = ClientSession::new(self.idle_timeout);
        let session = Arc::clone(&entry.session);
        sessions.insert(id, entry);

        tracing::debug!(session_id = %id, active = sessions.len(), "Session created");
        Ok((id, session))
    }

    /// Resolve the session named by the request's cookie, creating one if needed
    pub async fn resolve(&self, headers: &HeaderMap) -> Result<ClientHandle, SessionError> {
        if let Some(id) = session_id_from_headers(headers) {
            if let Some(session) = self.get_session(id).await {
                return Ok(ClientHandle {
                    id,
                    session,
                    created: false,
                });
            }
        }

        let (id, session) = self.create_session().await?;
        Ok(ClientHandle {
            id,
            session,
            created: true,
        })
    }

    /// Remove expired sessions
    ///
    /// # Returns
    /// Number of sessions removed
    pub async fn cleanup_expired_sessions(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired());
        before - sessions.len()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(50)
    }
}

/// Extract the session id from the `Cookie` headers, if present and well-formed
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Session-related errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session limit exceeded: maximum {0} concurrent sessions")]
    SessionLimitExceeded(usize),
}
