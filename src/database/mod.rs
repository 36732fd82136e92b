pub mod connection;
pub mod setup;
pub mod store;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use setup::ensure_schema;
pub use store::SqliteStore;
