pub mod settings;

pub use settings::{AppConfig, AuthSettings, RankingSettings, StoreSettings};
