//! Canteen Server - school canteen order taking
//!
//! Students submit name, class and a menu selection; each order gets a
//! unique `YYYYMMDD-NNNN` number. Staff list orders with a shared key.
//!
//! ```text
//! canteen-server/src/
//! ├── core/      # config, state, server, startup errors
//! ├── db/        # SQLite pool, migrations, order repository
//! ├── orders/    # numbering, menu, order service
//! ├── auth/      # staff key
//! ├── api/       # routers and handlers
//! ├── pages/     # HTML rendering
//! └── utils/     # AppError, logger, validation
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod pages;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use orders::{OrderService, generate_order_number};
pub use utils::{AppError, AppResult};

pub use utils::logger::{LogFormat, init_logger_with_file};

/// Load `.env` (if present) and start logging
pub fn setup_environment() -> Config {
    // Missing .env is normal
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        config.log_dir.as_deref(),
        LogFormat::for_environment(config.is_production()),
    );
    config
}

pub fn print_banner() {
    println!(
        r#"
  ___              _
 / __|__ _ _ _  __| |_ ___ ___ _ _
| (__/ _` | ' \/ _|  _/ -_) -_) ' \
 \___\__,_|_||_\__|\__\___\___|_||_|
    "#
    );
}
