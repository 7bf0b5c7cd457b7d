//! Application state shared across all handlers

use sea_orm::DatabaseConnection;

use crate::storage::AssetStore;

/// Explicit dependencies of every handler: the database connection and
/// the asset store. No ambient/global lookups.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub assets: AssetStore,
}

impl AppState {
    pub fn new(db: DatabaseConnection, assets: AssetStore) -> Self {
        Self { db, assets }
    }
}
