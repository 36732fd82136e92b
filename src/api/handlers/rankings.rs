use axum::{
    extract::{Path, Query, State},
    response::Json,
    Extension,
};
use std::sync::Arc;

use super::{AppState, GlobalParams, RegionalParams};
use crate::api::auth::AuthUser;
use crate::api::models::{
    rank_global, rank_regional, GlobalRankingEntry, HistoryResponse, RankingResponse,
    RegionalRankingEntry,
};
use crate::api::parsers::{non_empty, player_filters};
use crate::errors::{AppError, RankingOperation};
use crate::repository::PlayerQuery;

pub async fn get_regional_ranking(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RegionalParams>,
) -> Result<Json<RankingResponse<RegionalRankingEntry>>, AppError> {
    let filters = player_filters(params.state, params.city, params.gender, params.category);

    let players = state
        .repository
        .list_players(&PlayerQuery::regional(filters))
        .await
        .map_err(|e| RankingOperation::RegionalRanking.backend_failure(e))?;

    Ok(Json(RankingResponse {
        ranking: rank_regional(players),
    }))
}

pub async fn get_global_ranking(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GlobalParams>,
) -> Result<Json<RankingResponse<GlobalRankingEntry>>, AppError> {
    let players = state
        .repository
        .list_players(&PlayerQuery::global(non_empty(params.gender)))
        .await
        .map_err(|e| RankingOperation::GlobalRanking.backend_failure(e))?;

    Ok(Json(RankingResponse {
        ranking: rank_global(players),
    }))
}

/// Serves both `/history` (caller's own) and `/history/:player_id`.
///
/// Any caller may read any player's history by id.
pub async fn get_ranking_history(
    State(state): State<Arc<AppState>>,
    player_id: Option<Path<String>>,
    identity: Option<Extension<AuthUser>>,
) -> Result<Json<HistoryResponse>, AppError> {
    let target = resolve_target(
        player_id.map(|Path(id)| id),
        identity.map(|Extension(user)| user),
    )?;

    let history = state
        .repository
        .list_history(&target, state.config.rankings.history_limit)
        .await
        .map_err(|e| RankingOperation::RankingHistory.backend_failure(e))?;

    Ok(Json(HistoryResponse { history }))
}

fn resolve_target(player_id: Option<String>, identity: Option<AuthUser>) -> Result<String, AppError> {
    non_empty(player_id)
        .or_else(|| identity.map(|user| user.user_id))
        .ok_or_else(|| AppError::unauthorized("Authentication required"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn caller(id: &str) -> Option<AuthUser> {
        Some(AuthUser {
            user_id: id.to_string(),
        })
    }

    #[test]
    fn explicit_player_id_wins_over_caller() {
        let target = resolve_target(Some("42".to_string()), caller("me")).unwrap();
        assert_eq!(target, "42");
    }

    #[test]
    fn falls_back_to_caller_identity() {
        assert_eq!(resolve_target(None, caller("me")).unwrap(), "me");
        assert_eq!(resolve_target(Some(String::new()), caller("me")).unwrap(), "me");
    }

    #[test]
    fn no_target_is_unauthorized() {
        let err = resolve_target(None, None).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }
}
