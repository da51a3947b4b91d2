use serde::Serialize;
use sqlx::FromRow;

/// One row of the derived standings: a player and their win record.
///
/// `wins` and `matches` are `COUNT(*)` results, hence `i64`. Not stored;
/// recomputed from the match ledger on every read.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Standing {
    pub id: i32,
    pub name: String,
    pub wins: i64,
    pub matches: i64,
}
