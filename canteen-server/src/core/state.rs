use crate::auth::StaffKey;
use crate::core::{Config, Result, ServerError};
use crate::db::DbService;
use crate::orders::{Menu, OrderService};

/// Server state - shared handles for every request handler
///
/// Cloning is cheap: the pool and the menu are reference counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | db | DbService | SQLite pool |
/// | orders | OrderService | order taking and lookup |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub orders: OrderService,
}

impl ServerState {
    /// Build state from an already opened database
    pub fn new(config: Config, db: DbService) -> Self {
        let orders = OrderService::new(
            db.pool.clone(),
            Menu::default(),
            StaffKey::new(&config.staff_key),
        );
        Self { config, db, orders }
    }

    /// Open the configured database and build state
    pub async fn initialize(config: &Config) -> Result<Self> {
        if config.is_production() && config.staff_key == crate::core::config::DEFAULT_STAFF_KEY {
            tracing::warn!("STAFF_KEY is the default value; set it before going live");
        }

        let db = DbService::new(&config.database_path)
            .await
            .map_err(|e| ServerError::Init(e.to_string()))?;

        Ok(Self::new(config.clone(), db))
    }
}
