use std::sync::Arc;

use storage::{Database, repository::metrics::ReadPolicy, roster::Roster};

use crate::middleware::auth::SessionStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub roster: Arc<Roster>,
    pub sessions: SessionStore,
    pub read_policy: ReadPolicy,
}

impl AppState {
    pub fn new(db: Database, roster: Roster, sessions: SessionStore, read_policy: ReadPolicy) -> Self {
        Self {
            db,
            roster: Arc::new(roster),
            sessions,
            read_policy,
        }
    }
}
