use anyhow::{Context, Result};
use sqlx::PgPool;

/// Append one match outcome to the ledger.
///
/// Winner and loser may be equal and a pair may be recorded any number of
/// times; neither is checked here. A nonexistent id trips the store's
/// foreign-key constraint and that error propagates to the caller as-is.
pub async fn record(db: &PgPool, winner: i32, loser: i32) -> Result<()> {
    sqlx::query(r#"INSERT INTO "match" (winner, loser) VALUES ($1, $2)"#)
        .bind(winner)
        .bind(loser)
        .execute(db)
        .await
        .context("recording match outcome")?;
    log::debug!("recorded match: {winner} beat {loser}");
    Ok(())
}

/// Truncate the match ledger and reset its id sequence. Players are
/// untouched.
pub async fn delete_all(db: &PgPool) -> Result<()> {
    sqlx::query(r#"TRUNCATE "match" RESTART IDENTITY"#)
        .execute(db)
        .await
        .context("truncating matches")?;
    log::debug!("deleted all matches");
    Ok(())
}
