use anyhow::{Context, Result};

use super::connection::DbConn;

const SCHEMA: &str = include_str!("schema.sql");

/// Creates the `players` and `ranking_history` tables when missing.
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    conn.execute_batch(SCHEMA)
        .context("Failed to apply ranking schema")?;

    log::info!("Ranking tables ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::{create_memory_pool, get_connection};

    #[test]
    fn schema_is_idempotent() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();

        ensure_schema(&mut conn).unwrap();
        ensure_schema(&mut conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('players', 'ranking_history')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn history_rows_do_not_require_a_player_row() {
        let pool = create_memory_pool().unwrap();
        let mut conn = get_connection(&pool).unwrap();
        ensure_schema(&mut conn).unwrap();

        conn.execute(
            "INSERT INTO ranking_history (player_id, ranking_points, recorded_at) VALUES ('42', 10, '2024-01-01T00:00:00Z')",
            [],
        )
        .unwrap();
    }
}
