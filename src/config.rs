//! Process settings from the environment.

use crate::error::ConfigError;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_DB_PATH: &str = "/mnt/theaters/theaters.db";
pub const DEFAULT_PORT: u16 = 8001;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct Settings {
    pub db_path: PathBuf,
    /// Create the `cinemas` / `salas` tables at startup.
    pub init_schema: bool,
    pub host: String,
    pub port: u16,
    pub body_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            init_schema: true,
            host: "0.0.0.0".into(),
            port: DEFAULT_PORT,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl Settings {
    /// Reads `DB_PATH`, `INIT_SCHEMA`, `HOST`, `PORT`, `BODY_LIMIT_BYTES`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let db_path = lookup("DB_PATH").map(PathBuf::from).unwrap_or(defaults.db_path);
        // INIT_SCHEMA is an integer flag: 0 disables, anything else enables.
        let init_schema = match lookup("INIT_SCHEMA") {
            Some(v) => parse_var::<i64>("INIT_SCHEMA", &v)? != 0,
            None => defaults.init_schema,
        };
        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(v) => parse_var("PORT", &v)?,
            None => defaults.port,
        };
        let body_limit = match lookup("BODY_LIMIT_BYTES") {
            Some(v) => parse_var("BODY_LIMIT_BYTES", &v)?,
            None => defaults.body_limit,
        };
        Ok(Settings {
            db_path,
            init_schema,
            host,
            port,
            body_limit,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: value.to_string(),
    })
}
