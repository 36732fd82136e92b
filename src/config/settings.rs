use anyhow::{bail, Context, Result};
use std::env;

const DEFAULT_DATABASE_PATH: &str = "climb_rankings.db";
const DEFAULT_USER_HEADER: &str = "x-user-id";

#[derive(Debug, Clone)]
pub struct RankingSettings {
    pub history_limit: usize,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self { history_limit: 30 }
    }
}

/// Where ranking data is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreSettings {
    Sqlite {
        database_path: String,
    },
    /// Hosted PostgREST endpoint (Supabase).
    Rest {
        base_url: String,
        service_key: String,
        timeout_secs: u64,
        user_agent: String,
    },
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self::Sqlite {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthSettings {
    /// Header the upstream gateway fills with the authenticated user id.
    pub user_header: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            user_header: DEFAULT_USER_HEADER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub rankings: RankingSettings,
    pub store: StoreSettings,
    pub auth: AuthSettings,
}

impl AppConfig {
    /// Reads the process environment, after loading `.env` when present.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env file loaded: {}", e);
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = parse_store_settings(&lookup)?;
        let auth = AuthSettings {
            user_header: lookup("AUTH_USER_HEADER")
                .unwrap_or_else(|| DEFAULT_USER_HEADER.to_string())
                .to_ascii_lowercase(),
        };

        Ok(Self {
            rankings: RankingSettings::default(),
            store,
            auth,
        })
    }
}

fn parse_store_settings<F>(lookup: &F) -> Result<StoreSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let backend = lookup("STORE_BACKEND").unwrap_or_else(|| "sqlite".to_string());

    match backend.as_str() {
        "sqlite" => Ok(StoreSettings::Sqlite {
            database_path: lookup("DATABASE_PATH")
                .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
        }),
        "rest" => {
            let base_url = lookup("SUPABASE_URL").context("SUPABASE_URL must be set")?;
            let service_key =
                lookup("SUPABASE_SERVICE_KEY").context("SUPABASE_SERVICE_KEY must be set")?;
            let timeout_secs = match lookup("STORE_TIMEOUT_SECS") {
                Some(raw) => raw
                    .parse()
                    .with_context(|| format!("Invalid STORE_TIMEOUT_SECS: {}", raw))?,
                None => 30,
            };

            Ok(StoreSettings::Rest {
                base_url: base_url.trim_end_matches('/').to_string(),
                service_key,
                timeout_secs,
                user_agent: format!("ClimbRankings/{}", env!("CARGO_PKG_VERSION")),
            })
        }
        other => bail!("Unknown STORE_BACKEND: {}", other),
    }
}
