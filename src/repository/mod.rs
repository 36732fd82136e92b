use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Player, PlayerFilters, RankingHistoryRecord};
use crate::errors::StoreError;
use crate::query::{Column, Direction, Query, Table};
use crate::store::{DataStore, Row};

const REGIONAL_COLUMNS: &[Column] = &[
    Column::Id,
    Column::FullName,
    Column::State,
    Column::City,
    Column::Gender,
    Column::Category,
    Column::RankingPoints,
    Column::TotalMatches,
    Column::TotalWins,
];

const GLOBAL_COLUMNS: &[Column] = &[
    Column::Id,
    Column::FullName,
    Column::State,
    Column::City,
    Column::Category,
    Column::RankingPoints,
    Column::GlobalRankingPoints,
];

/// Which points total a leaderboard is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    RankingPoints,
    GlobalRankingPoints,
}

impl SortKey {
    fn column(self) -> Column {
        match self {
            Self::RankingPoints => Column::RankingPoints,
            Self::GlobalRankingPoints => Column::GlobalRankingPoints,
        }
    }
}

/// Player listing request: filters, projection and sort key of one leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerQuery {
    pub filters: PlayerFilters,
    pub columns: &'static [Column],
    pub sort: SortKey,
}

impl PlayerQuery {
    pub fn regional(filters: PlayerFilters) -> Self {
        Self {
            filters,
            columns: REGIONAL_COLUMNS,
            sort: SortKey::RankingPoints,
        }
    }

    pub fn global(gender: Option<String>) -> Self {
        Self {
            filters: PlayerFilters {
                gender,
                ..PlayerFilters::default()
            },
            columns: GLOBAL_COLUMNS,
            sort: SortKey::GlobalRankingPoints,
        }
    }

    pub fn to_query(&self) -> Query {
        let filters = [
            (Column::State, &self.filters.state),
            (Column::City, &self.filters.city),
            (Column::Gender, &self.filters.gender),
            (Column::Category, &self.filters.category),
        ];

        filters
            .into_iter()
            .filter_map(|(column, value)| value.as_ref().map(|v| (column, v)))
            .fold(
                Query::from(Table::Players).select(self.columns),
                |query, (column, value)| query.eq(column, value.as_str()),
            )
            .order(self.sort.column(), Direction::Desc)
    }
}

pub fn history_query(player_id: &str, limit: usize) -> Query {
    Query::from(Table::RankingHistory)
        .eq(Column::PlayerId, player_id)
        .order(Column::RecordedAt, Direction::Desc)
        .limit(limit)
}

/// Read access to players and their ranking history, injected into handlers.
#[async_trait]
pub trait RankingRepository: Send + Sync {
    /// Players matching every filter, in the store's sort order.
    async fn list_players(&self, query: &PlayerQuery) -> Result<Vec<Player>, StoreError>;

    /// Latest `limit` history records of a player, newest first.
    async fn list_history(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<RankingHistoryRecord>, StoreError>;
}

/// Repository backed by any [`DataStore`].
pub struct StoreRepository {
    store: Arc<dyn DataStore>,
}

impl StoreRepository {
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RankingRepository for StoreRepository {
    async fn list_players(&self, query: &PlayerQuery) -> Result<Vec<Player>, StoreError> {
        let rows = self.store.fetch(&query.to_query()).await?;
        decode_players(rows)
    }

    async fn list_history(
        &self,
        player_id: &str,
        limit: usize,
    ) -> Result<Vec<RankingHistoryRecord>, StoreError> {
        self.store.fetch(&history_query(player_id, limit)).await
    }
}

fn decode_players(rows: Vec<Row>) -> Result<Vec<Player>, StoreError> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(serde_json::Value::Object(row)).map_err(|source| {
                StoreError::Decode {
                    what: "player row",
                    source,
                }
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    /// Records the last query and answers with canned rows.
    struct CannedStore {
        rows: Vec<Row>,
        seen: Mutex<Option<Query>>,
    }

    impl CannedStore {
        fn new(rows: Vec<serde_json::Value>) -> Self {
            let rows = rows
                .into_iter()
                .filter_map(|v| v.as_object().cloned())
                .collect();
            Self {
                rows,
                seen: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl DataStore for CannedStore {
        async fn fetch(&self, query: &Query) -> Result<Vec<Row>, StoreError> {
            *self.seen.lock().unwrap() = Some(query.clone());
            Ok(self.rows.clone())
        }
    }

    #[test]
    fn regional_query_only_filters_present_params() {
        let query = PlayerQuery::regional(PlayerFilters {
            state: Some("CA".to_string()),
            category: Some("open".to_string()),
            ..PlayerFilters::default()
        })
        .to_query();

        let statement = query.to_sql();
        assert_eq!(
            statement.sql,
            "SELECT id, full_name, state, city, gender, category, ranking_points, total_matches, total_wins FROM players WHERE state = ?1 AND category = ?2 ORDER BY ranking_points DESC"
        );
        assert_eq!(statement.params, vec!["CA", "open"]);
    }

    #[test]
    fn global_query_sorts_by_global_points() {
        let statement = PlayerQuery::global(Some("F".to_string())).to_query().to_sql();
        assert_eq!(
            statement.sql,
            "SELECT id, full_name, state, city, category, ranking_points, global_ranking_points FROM players WHERE gender = ?1 ORDER BY global_ranking_points DESC"
        );
    }

    #[tokio::test]
    async fn list_history_passes_player_and_limit() {
        let canned = Arc::new(CannedStore::new(vec![json!({
            "id": 1,
            "player_id": "42",
            "recorded_at": "2024-05-01T00:00:00Z"
        })]));
        let repo = StoreRepository::new(canned.clone());

        let history = repo.list_history("42", 30).await.unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0]["recorded_at"], json!("2024-05-01T00:00:00Z"));
        assert_eq!(
            canned.seen.lock().unwrap().clone(),
            Some(history_query("42", 30))
        );
    }

    #[tokio::test]
    async fn history_rows_are_not_reinterpreted() {
        let rows = vec![
            json!({ "player_id": 42, "recorded_at": "2024-03-01 12:00:00" }),
            json!({ "player_id": 42, "recorded_at": "2024-02-01T12:00:00.123456+02:00" }),
        ];
        let canned = Arc::new(CannedStore::new(rows.clone()));
        let repo = StoreRepository::new(canned);

        let history = repo.list_history("42", 30).await.unwrap();

        let returned: Vec<serde_json::Value> =
            history.into_iter().map(serde_json::Value::Object).collect();
        assert_eq!(returned, rows);
    }

    #[tokio::test]
    async fn undecodable_rows_are_decode_errors() {
        let canned = Arc::new(CannedStore::new(vec![json!({ "full_name": "No Id" })]));
        let repo = StoreRepository::new(canned);

        let err = repo
            .list_players(&PlayerQuery::global(None))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Decode { .. }));
    }
}
