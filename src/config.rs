//! Runtime configuration for the tournament tracker.

use once_cell::sync::Lazy;
use std::env;

#[derive(Debug)]
pub struct Settings {
    /// Postgres connection string for the tournament store. Taken from
    /// `TOURNAMENT_DATABASE_URL`; defaults to `postgres://localhost/tournament`.
    pub database_url: String,
}

impl Settings {
    fn from_env() -> Self {
        let database_url = env::var("TOURNAMENT_DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/tournament".into());

        Settings { database_url }
    }
}

static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

pub fn settings() -> &'static Settings {
    &SETTINGS
}
