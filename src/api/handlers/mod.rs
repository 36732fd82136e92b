use serde::Deserialize;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::repository::RankingRepository;

pub mod health;
pub mod rankings;

pub struct AppState {
    pub repository: Arc<dyn RankingRepository>,
    pub config: AppConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegionalParams {
    pub state: Option<String>,
    pub city: Option<String>,
    pub gender: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GlobalParams {
    pub gender: Option<String>,
}
