use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Pool over the SQLite file at `database_path`, created on first open.
pub fn create_pool(database_path: &str) -> Result<DbPool> {
    r2d2::Pool::new(SqliteConnectionManager::file(database_path))
        .with_context(|| format!("Failed to open SQLite database at {}", database_path))
}

/// Every `:memory:` connection is a separate database, so this pool holds
/// exactly one connection.
pub fn create_memory_pool() -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(1)
        .build(SqliteConnectionManager::memory())
        .context("Failed to open in-memory SQLite database")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    let state = pool.state();
    pool.get().with_context(|| {
        format!(
            "No SQLite connection available ({} open, {} idle)",
            state.connections, state.idle_connections
        )
    })
}
