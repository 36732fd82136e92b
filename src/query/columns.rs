#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Players,
    RankingHistory,
}

impl Table {
    pub fn name(self) -> &'static str {
        match self {
            Self::Players => "players",
            Self::RankingHistory => "ranking_history",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    FullName,
    State,
    City,
    Gender,
    Category,
    RankingPoints,
    GlobalRankingPoints,
    TotalMatches,
    TotalWins,
    PlayerId,
    RecordedAt,
}

impl Column {
    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FullName => "full_name",
            Self::State => "state",
            Self::City => "city",
            Self::Gender => "gender",
            Self::Category => "category",
            Self::RankingPoints => "ranking_points",
            Self::GlobalRankingPoints => "global_ranking_points",
            Self::TotalMatches => "total_matches",
            Self::TotalWins => "total_wins",
            Self::PlayerId => "player_id",
            Self::RecordedAt => "recorded_at",
        }
    }
}
