//! Shared state handed to every web handler.

use std::sync::Arc;

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::config::Config;
use crate::core::{ResolvedSession, Session, SessionManager};
use crate::web::error::WebError;

/// Name of the cookie carrying the browser's session id.
pub const SESSION_COOKIE: &str = "sample_tracker_session";

#[derive(Clone)]
pub struct WebAppState {
    config: Arc<Config>,
    sessions: SessionManager,
}

impl WebAppState {
    pub fn new(config: Config) -> Self {
        let sessions = SessionManager::new(config.session.idle_timeout_minutes);
        Self {
            config: Arc::new(config),
            sessions,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }

    /// Find or start the session named by the request's cookie.
    ///
    /// The returned jar carries a fresh cookie whenever a new session was
    /// started, and must be part of the response.
    pub fn resolve_session(&self, jar: CookieJar) -> (CookieJar, Uuid) {
        let candidate = jar
            .get(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok());

        let ResolvedSession { id, created } = self.sessions.resolve(candidate);
        if !created {
            return (jar, id);
        }

        let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax);
        (jar.add(cookie), id)
    }

    /// The session named by the request's cookie, for requests that change
    /// records.
    ///
    /// A write without a live session would land in a throwaway session the
    /// browser can never see again, so it is refused instead.
    pub fn require_session(&self, jar: &CookieJar) -> Result<Uuid, WebError> {
        let candidate = jar
            .get(SESSION_COOKIE)
            .and_then(|c| Uuid::parse_str(c.value()).ok());

        self.sessions.find(candidate).ok_or_else(|| {
            tracing::warn!(had_cookie = candidate.is_some(), "Write without a live session");
            WebError::BadRequest(
                "Your session has expired or cookies are blocked. Enable cookies for this site and reload the page."
                    .to_string(),
            )
        })
    }

    /// Run `f` against the live session `id`.
    pub fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, WebError> {
        self.sessions
            .with_session(id, f)
            .ok_or_else(|| WebError::Internal(format!("Session {} vanished", id)))
    }
}
