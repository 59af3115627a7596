use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Extension,
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use storage::models::{ParticipantId, Role};
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::policy::{Action, Actor, authorize};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub participant_id: ParticipantId,
    pub expires_at: DateTime<Utc>,
}

/// In-memory bearer sessions issued at login.
///
/// Sessions do not survive a restart; clients log in again.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// `None` when `hours` does not fit a [`Duration`].
    pub fn with_ttl_hours(hours: i64) -> Option<Self> {
        Duration::try_hours(hours).map(Self::new)
    }

    /// New session for `participant_id`, or `None` if its expiry would fall
    /// outside the representable date range.
    pub fn issue(&self, participant_id: ParticipantId) -> Option<(Uuid, Session)> {
        let expires_at = Utc::now().checked_add_signed(self.ttl)?;
        let token = Uuid::new_v4();
        let session = Session {
            participant_id,
            expires_at,
        };

        self.sessions.write().insert(token, session);
        Some((token, session))
    }

    /// Live session for `token`; expired sessions are dropped on the way.
    pub fn resolve(&self, token: &str) -> Option<Session> {
        let token = Uuid::parse_str(token).ok()?;
        let session = *self.sessions.read().get(&token)?;

        if session.expires_at <= Utc::now() {
            self.sessions.write().remove(&token);
            return None;
        }

        Some(session)
    }

    pub fn revoke(&self, token: &str) -> bool {
        match Uuid::parse_str(token) {
            Ok(token) => self.sessions.write().remove(&token).is_some(),
            Err(_) => false,
        }
    }

    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| session.expires_at > now);
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The authenticated caller, placed in request extensions by [`require_session`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub participant_id: ParticipantId,
    pub role: Role,
    pub token: String,
}

impl CurrentUser {
    pub fn actor(&self) -> Actor {
        Actor::from_role(self.participant_id, self.role).unwrap_or(Actor::Public)
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> WebResult<Response> {
    let Some(token) = bearer_token(req.headers()).map(str::to_owned) else {
        tracing::warn!("Request without bearer token");
        return Err(WebError::Unauthorized);
    };

    let Some(session) = state.sessions.resolve(&token) else {
        tracing::warn!("Invalid or expired session token");
        return Err(WebError::Unauthorized);
    };

    // The roster may have changed since login (restart with a new file).
    let participant = state
        .roster
        .find(session.participant_id)
        .filter(|p| p.can_log_in())
        .ok_or(WebError::Unauthorized)?;

    req.extensions_mut().insert(CurrentUser {
        participant_id: participant.id,
        role: participant.role,
        token,
    });

    Ok(next.run(req).await)
}

pub async fn require_admin(
    Extension(user): Extension<CurrentUser>,
    req: Request,
    next: Next,
) -> WebResult<Response> {
    if let Err(denied) = authorize(user.actor(), Action::ListDirectors) {
        tracing::warn!(
            participant_id = user.participant_id,
            "Non-administrator attempted an admin route"
        );
        return Err(denied.into());
    }

    Ok(next.run(req).await)
}
