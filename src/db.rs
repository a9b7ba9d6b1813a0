//! SQLite pool for the phone catalog.
//!
//! Every connection handed out by the pool has the catalog pragmas applied and
//! the [`unicode_lower`] SQL function registered, which the case-insensitive
//! lookups in [`crate::repository`] rely on.

use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

diesel::define_sql_function! {
    /// Lowercases text with Rust's Unicode case mapping. SQLite's built-in
    /// `lower()` only folds ASCII letters.
    fn unicode_lower(x: Text) -> Text;
}

/// Per-connection setup for the catalog database.
#[derive(Debug)]
pub struct CatalogConnection {
    /// Write Ahead Logging, so searches don't block behind an import.
    pub enable_wal: bool,
    /// How long to wait for a locked database.
    pub busy_timeout: Option<Duration>,
}

impl Default for CatalogConnection {
    fn default() -> Self {
        Self {
            enable_wal: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl CatalogConnection {
    fn pragmas(&self) -> String {
        let mut pragmas = String::new();
        if self.enable_wal {
            pragmas.push_str("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        if let Some(timeout) = self.busy_timeout {
            pragmas.push_str(&format!("PRAGMA busy_timeout = {};", timeout.as_millis()));
        }
        pragmas
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for CatalogConnection {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        (|| {
            let pragmas = self.pragmas();
            if !pragmas.is_empty() {
                conn.batch_execute(&pragmas)?;
            }
            unicode_lower_utils::register_impl(conn, |text: String| text.to_lowercase())
        })()
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a pool for the catalog database at `database_url`.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(CatalogConnection::default()))
        .build(manager)
}

/// Retrieve a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| {
        error!("Failed to get connection from pool: {e}");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pragmas_enable_wal_and_timeout() {
        let pragmas = CatalogConnection::default().pragmas();
        assert!(pragmas.contains("journal_mode = WAL"));
        assert!(pragmas.contains("busy_timeout = 30000"));
    }

    #[test]
    fn no_pragmas_when_everything_is_off() {
        let options = CatalogConnection {
            enable_wal: false,
            busy_timeout: None,
        };
        assert!(options.pragmas().is_empty());
    }
}
