pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod http;
pub mod query;
pub mod repository;
pub mod services;
pub mod store;

use anyhow::{bail, Result};
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::{AppConfig, StoreSettings};
use crate::services::server::ServerService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let config = AppConfig::from_env()?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_init_db() -> Result<()> {
    let config = AppConfig::from_env()?;
    let StoreSettings::Sqlite { database_path } = &config.store else {
        bail!("init-db only applies to the sqlite store backend");
    };

    let pool = database::create_pool(database_path)?;
    let mut conn = database::get_connection(&pool)?;
    database::ensure_schema(&mut conn)
}
