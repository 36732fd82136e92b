use anyhow::Result;
use async_trait::async_trait;
use log::info;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::api::supabase_client::SupabaseStore;
use crate::config::StoreSettings;
use crate::database::{self, SqliteStore};
use crate::errors::StoreError;
use crate::query::Query;

/// A result row keyed by column name.
pub type Row = Map<String, Value>;

/// Executes read queries against a relational backend.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn fetch(&self, query: &Query) -> Result<Vec<Row>, StoreError>;
}

/// Opens the store selected by configuration.
pub fn open_store(settings: &StoreSettings) -> Result<Arc<dyn DataStore>> {
    match settings {
        StoreSettings::Sqlite { database_path } => {
            info!("Using SQLite store at {}", database_path);
            let pool = database::create_pool(database_path)?;
            Ok(Arc::new(SqliteStore::new(pool)))
        }
        StoreSettings::Rest {
            base_url,
            service_key,
            timeout_secs,
            user_agent,
        } => {
            info!("Using hosted REST store at {}", base_url);
            let store = SupabaseStore::new(base_url, service_key, user_agent, *timeout_secs)?;
            Ok(Arc::new(store))
        }
    }
}
