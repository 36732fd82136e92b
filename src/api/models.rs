use serde::Serialize;
use serde_json::Number;

use crate::domain::{Player, RankingHistoryRecord};

/// Regional leaderboard row.
///
/// Carries the selected player columns under their store names alongside
/// the camelCase aliases the web client reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalRankingEntry {
    pub id: String,
    pub full_name: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub category: Option<String>,
    pub ranking_points: Number,
    pub total_matches: Number,
    pub total_wins: Number,
    pub position: usize,
    #[serde(rename = "fullName")]
    pub full_name_alias: String,
    #[serde(rename = "rankingPoints")]
    pub ranking_points_alias: Number,
    #[serde(rename = "totalMatches")]
    pub total_matches_alias: Number,
    #[serde(rename = "totalWins")]
    pub total_wins_alias: Number,
    #[serde(rename = "playerId")]
    pub player_id: String,
}

impl RegionalRankingEntry {
    pub fn from_player(player: Player, position: usize) -> Self {
        Self {
            full_name_alias: player.full_name.clone(),
            ranking_points_alias: player.ranking_points.clone(),
            total_matches_alias: player.total_matches.clone(),
            total_wins_alias: player.total_wins.clone(),
            player_id: player.id.clone(),
            id: player.id,
            full_name: player.full_name,
            state: player.state,
            city: player.city,
            gender: player.gender,
            category: player.category,
            ranking_points: player.ranking_points,
            total_matches: player.total_matches,
            total_wins: player.total_wins,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalRankingEntry {
    pub player_id: String,
    pub full_name: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub category: Option<String>,
    pub regional_points: Number,
    pub global_points: Number,
    pub global_position: usize,
    /// Always 0; regional rank is not resolved for global entries.
    pub regional_position: usize,
}

impl GlobalRankingEntry {
    pub fn from_player(player: Player, global_position: usize) -> Self {
        Self {
            player_id: player.id,
            full_name: player.full_name,
            state: player.state,
            city: player.city,
            category: player.category,
            regional_points: player.ranking_points,
            global_points: player.global_ranking_points,
            global_position,
            regional_position: 0,
        }
    }
}

/// Positions follow the order the store returned, starting at 1.
pub fn rank_regional(players: Vec<Player>) -> Vec<RegionalRankingEntry> {
    players
        .into_iter()
        .enumerate()
        .map(|(i, player)| RegionalRankingEntry::from_player(player, i + 1))
        .collect()
}

pub fn rank_global(players: Vec<Player>) -> Vec<GlobalRankingEntry> {
    players
        .into_iter()
        .enumerate()
        .map(|(i, player)| GlobalRankingEntry::from_player(player, i + 1))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct RankingResponse<T> {
    pub ranking: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<RankingHistoryRecord>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn player(id: &str, points: i64, global: i64) -> Player {
        Player {
            id: id.to_string(),
            full_name: format!("Player {}", id),
            state: Some("CA".to_string()),
            city: Some("Fresno".to_string()),
            gender: Some("F".to_string()),
            category: Some("open".to_string()),
            ranking_points: Number::from(points),
            global_ranking_points: Number::from(global),
            total_matches: Number::from(12),
            total_wins: Number::from(7),
        }
    }

    #[test]
    fn regional_positions_follow_input_order() {
        // Deliberately not sorted by points: order is taken as given.
        let entries = rank_regional(vec![player("a", 10, 0), player("b", 90, 0), player("c", 50, 0)]);

        let positions: Vec<(String, usize)> = entries
            .iter()
            .map(|e| (e.player_id.clone(), e.position))
            .collect();
        assert_eq!(
            positions,
            vec![("a".into(), 1), ("b".into(), 2), ("c".into(), 3)]
        );
    }

    #[test]
    fn regional_entry_serializes_store_fields_and_aliases() {
        let entry = RegionalRankingEntry::from_player(player("p1", 640, 900), 1);

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "id": "p1",
                "full_name": "Player p1",
                "state": "CA",
                "city": "Fresno",
                "gender": "F",
                "category": "open",
                "ranking_points": 640,
                "total_matches": 12,
                "total_wins": 7,
                "position": 1,
                "fullName": "Player p1",
                "rankingPoints": 640,
                "totalMatches": 12,
                "totalWins": 7,
                "playerId": "p1"
            })
        );
    }

    #[test]
    fn global_entry_has_zero_regional_position() {
        let entries = rank_global(vec![player("x", 100, 2000), player("y", 300, 1500)]);

        assert_eq!(entries[0].global_position, 1);
        assert_eq!(entries[1].global_position, 2);
        assert!(entries.iter().all(|e| e.regional_position == 0));

        assert_eq!(
            serde_json::to_value(&entries[0]).unwrap(),
            json!({
                "playerId": "x",
                "fullName": "Player x",
                "state": "CA",
                "city": "Fresno",
                "category": "open",
                "regionalPoints": 100,
                "globalPoints": 2000,
                "globalPosition": 1,
                "regionalPosition": 0
            })
        );
    }

    #[test]
    fn empty_results_rank_to_empty() {
        assert!(rank_regional(Vec::new()).is_empty());
        assert!(rank_global(Vec::new()).is_empty());
    }
}
