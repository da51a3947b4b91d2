use anyhow::{Context, Result};
use sqlx::PgPool;

use crate::db::models::Standing;

/// Current standings: every registered player with their win record,
/// best record first.
///
/// Wins and matches are correlated counts over the ledger, so players with
/// no matches yet show up as 0/0. Ties on wins are ordered by ascending
/// player id, which keeps the ranking deterministic within a run.
///
/// Read-only, and not isolated from concurrent writers: a `record` or
/// truncate racing this query from another caller can leave the result
/// stale by the time it is used.
pub async fn compute(db: &PgPool) -> Result<Vec<Standing>> {
    sqlx::query_as::<_, Standing>(
        r#"
        SELECT player.id,
               player.name,
               (SELECT COUNT(*)
                    FROM "match" WHERE "match".winner = player.id) wins,
               (SELECT COUNT(*)
                    FROM "match" WHERE "match".loser = player.id OR
                                       "match".winner = player.id) matches
          FROM player
         ORDER BY wins DESC, player.id
        "#,
    )
    .fetch_all(db)
    .await
    .context("computing standings")
}
