use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use serde_json::Value;

use crate::errors::StoreError;
use crate::http::RestClient;
use crate::query::{Query, Table};
use crate::store::{DataStore, Row};

/// Hosted store reached through its PostgREST interface
pub struct SupabaseStore {
    client: RestClient,
    base_url: String,
}

impl SupabaseStore {
    pub fn new(base_url: &str, service_key: &str, user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = RestClient::new(user_agent, timeout_secs, service_key)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn build_table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url, table.name())
    }
}

#[async_trait]
impl DataStore for SupabaseStore {
    async fn fetch(&self, query: &Query) -> Result<Vec<Row>, StoreError> {
        let url = self.build_table_url(query.table());
        let params = query.to_rest_params();
        debug!("GET {} {:?}", url, params);

        let response = self.client.get(&url, &params).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        parse_rows(&text)
    }
}

/// A `null` body is treated as an empty result set.
fn parse_rows(text: &str) -> Result<Vec<Row>, StoreError> {
    let value: Value = serde_json::from_str(text).map_err(|source| StoreError::Decode {
        what: "store response",
        source,
    })?;

    match value {
        Value::Null => Ok(Vec::new()),
        other => serde_json::from_value(other).map_err(|source| StoreError::Decode {
            what: "store rows",
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_rest_table_url() {
        let store = SupabaseStore::new("https://abc.supabase.co/", "key", "test", 5).unwrap();
        assert_eq!(
            store.build_table_url(Table::RankingHistory),
            "https://abc.supabase.co/rest/v1/ranking_history"
        );
    }

    #[test]
    fn parses_row_arrays() {
        let rows = parse_rows(r#"[{"id":"a","ranking_points":10},{"id":"b"}]"#).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("ranking_points"), Some(&Value::from(10)));
    }

    #[test]
    fn null_body_is_empty() {
        assert!(parse_rows("null").unwrap().is_empty());
    }

    #[test]
    fn object_body_is_a_decode_error() {
        let err = parse_rows(r#"{"message":"oops"}"#).unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }
}
