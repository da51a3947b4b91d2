//! Postgres access layer: one repository module per table plus the ranked
//! standings query. Every operation takes `&PgPool` and checks a connection
//! out of the pool for just that call; the connection returns to the pool on
//! every exit path, success or failure.

pub mod match_repo;
pub mod models;
pub mod player_repo;
pub mod standings_repo;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config;

/// Build the shared Postgres pool from [`config::settings`].
///
/// Opened once at process start and passed to every store operation.
pub async fn connect() -> Result<PgPool> {
    let settings = config::settings();
    PgPoolOptions::new()
        .max_connections(5)
        .connect(&settings.database_url)
        .await
        .context("connecting to the tournament database")
}
