use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::ws::hub::TournamentSessionRegistry;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Registry of live websocket sessions, keyed by tournament
    registry: Arc<TournamentSessionRegistry>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            registry: Arc::new(TournamentSessionRegistry::new()),
        }
    }

    pub fn registry(&self) -> Arc<TournamentSessionRegistry> {
        self.registry.clone()
    }

    #[cfg(test)]
    pub fn for_tests(db: DatabaseConnection) -> Self {
        Self::new(db)
    }
}
