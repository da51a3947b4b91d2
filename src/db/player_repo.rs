use anyhow::{Context, Result};
use sqlx::PgPool;

/// Register a player and return the id the store assigned.
///
/// Names need not be unique; no validation happens here.
pub async fn register(db: &PgPool, name: &str) -> Result<i32> {
    let id = sqlx::query_scalar::<_, i32>("INSERT INTO player (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(db)
        .await
        .context("registering player")?;
    log::debug!("registered player {id} ({name})");
    Ok(id)
}

/// Number of currently registered players.
pub async fn count(db: &PgPool) -> Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT count(*) FROM player")
        .fetch_one(db)
        .await
        .context("counting players")
}

/// Remove every player, cascading into the match ledger, and reset the id
/// sequence so the next registration starts from 1 again.
pub async fn delete_all(db: &PgPool) -> Result<()> {
    sqlx::query("TRUNCATE player RESTART IDENTITY CASCADE")
        .execute(db)
        .await
        .context("truncating players")?;
    log::debug!("deleted all players (matches cascaded)");
    Ok(())
}
