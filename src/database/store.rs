use async_trait::async_trait;
use rusqlite::params_from_iter;
use rusqlite::types::ValueRef;
use serde_json::{Number, Value};

use super::connection::DbPool;
use crate::errors::StoreError;
use crate::query::{Query, SqlStatement};
use crate::store::{DataStore, Row};

/// Local SQLite backend; queries run on the blocking thread pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DataStore for SqliteStore {
    async fn fetch(&self, query: &Query) -> Result<Vec<Row>, StoreError> {
        let pool = self.pool.clone();
        let statement = query.to_sql();

        tokio::task::spawn_blocking(move || run_statement(&pool, &statement))
            .await
            .map_err(|e| StoreError::Database(format!("query task failed: {}", e)))?
    }
}

fn run_statement(pool: &DbPool, statement: &SqlStatement) -> Result<Vec<Row>, StoreError> {
    let conn = pool.get()?;
    let mut stmt = conn.prepare(&statement.sql)?;
    let names: Vec<String> = stmt.column_names().iter().map(|n| n.to_string()).collect();

    let rows = stmt
        .query_map(params_from_iter(statement.params.iter()), |row| {
            let mut out = Row::new();
            for (idx, name) in names.iter().enumerate() {
                out.insert(name.clone(), to_json(row.get_ref(idx)?));
            }
            Ok(out)
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::Array(bytes.iter().map(|b| Value::from(*b)).collect()),
    }
}
