//! Swiss-system tournament tracker.
//!
//! Players and match outcomes live in Postgres; standings are derived from
//! the ledger on every read and the pairing engine turns ranked standings
//! into next-round matchups. All store access goes through [`db`]; the
//! pairing logic in [`pairing`] is pure and never touches the store.

pub mod config;
pub mod db;
pub mod pairing;

pub use db::models::Standing;
pub use pairing::Pairing;
