//! Swiss pairing: fold ranked standings into next-round matchups.

use anyhow::{ensure, Result};
use serde::Serialize;

use crate::db::models::Standing;

/// One next-round matchup between two adjacent players in the standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub id1: i32,
    pub name1: String,
    pub id2: i32,
    pub name2: String,
}

/// Pair each player with their nearest-ranked neighbour: rank 1 with rank 2,
/// rank 3 with rank 4, and so on. The input is taken as already ranked, so
/// the result is deterministic for a fixed standings ordering.
///
/// An odd number of entries is a precondition violation and returns an
/// error; no bye is assigned. Two players who already met are paired again
/// if they end up adjacent.
pub fn pair(standings: &[Standing]) -> Result<Vec<Pairing>> {
    ensure!(
        standings.len() % 2 == 0,
        "cannot pair an odd number of players ({})",
        standings.len()
    );

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing {
            id1: pair[0].id,
            name1: pair[0].name.clone(),
            id2: pair[1].id,
            name2: pair[1].name.clone(),
        })
        .collect())
}
