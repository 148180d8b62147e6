use std::fmt::Display;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::auth::password::{check_phc, hash_password};

/// Default session lifetime in hours.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
const DEFAULT_SEED_PATH: &str = "data/dictionary.json";
const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 3600;

/// Everything the dictionary server reads from its environment.
///
/// Only the admin password lacks a default; the rest suits local
/// development as is.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Browser origins allowed to call the API with credentials.
    pub cors_origins: Vec<String>,
    pub request_timeout_secs: u64,
    /// Postgres URL. When unset the server keeps words and sessions in memory.
    pub database_url: Option<String>,
    /// Bundled dictionary used to seed an empty store. `None` disables seeding.
    pub seed_path: Option<String>,
    pub admin: AdminConfig,
    pub session: SessionConfig,
}

/// The administrator credential row.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    /// Argon2id PHC string.
    pub password_hash: String,
}

/// Session cookie and lifetime settings.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Absolute lifetime counted from login.
    pub ttl_hours: i64,
    /// Add the `Secure` attribute to the session cookie.
    pub cookie_secure: bool,
    /// Period of the expired-session purge. Never zero.
    pub cleanup_interval_secs: u64,
}

impl ServerConfig {
    /// Read the configuration, falling back to defaults.
    ///
    /// | Env Var                         | Default                  |
    /// |---------------------------------|--------------------------|
    /// | `HOST`                          | `0.0.0.0`                |
    /// | `PORT`                          | `3000`                   |
    /// | `CORS_ORIGINS`                  | `http://localhost:3000`  |
    /// | `REQUEST_TIMEOUT_SECS`          | `30`                     |
    /// | `DATABASE_URL`                  | unset (in-memory)        |
    /// | `SEED_PATH`                     | `data/dictionary.json`   |
    /// | `ADMIN_USERNAME`                | `admin`                  |
    /// | `ADMIN_PASSWORD_HASH`           | --                       |
    /// | `ADMIN_PASSWORD`                | -- (hashed at startup)   |
    /// | `SESSION_TTL_HOURS`             | `24`                     |
    /// | `SESSION_COOKIE_SECURE`         | `false`                  |
    /// | `SESSION_CLEANUP_INTERVAL_SECS` | `3600`                   |
    ///
    /// # Panics
    ///
    /// Panics if a numeric or boolean variable does not parse, if
    /// `SESSION_CLEANUP_INTERVAL_SECS` is zero, if
    /// `ADMIN_PASSWORD_HASH` is not a PHC string, or if neither it nor
    /// `ADMIN_PASSWORD` is set.
    pub fn from_env() -> Self {
        let cors_origins = split_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.into()),
        );

        // An explicitly blank SEED_PATH turns seeding off.
        let seed_path = match std::env::var("SEED_PATH") {
            Ok(path) => Some(path).filter(|p| !p.trim().is_empty()),
            Err(_) => Some(DEFAULT_SEED_PATH.into()),
        };

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env_parsed("PORT", 3000),
            cors_origins,
            request_timeout_secs: env_parsed("REQUEST_TIMEOUT_SECS", 30),
            database_url: env_nonblank("DATABASE_URL"),
            seed_path,
            admin: AdminConfig::from_env(),
            session: SessionConfig::from_env(),
        }
    }
}

impl AdminConfig {
    fn from_env() -> Self {
        let password_hash = match env_nonblank("ADMIN_PASSWORD_HASH") {
            Some(hash) => {
                check_phc(&hash).unwrap_or_else(|e| panic!("Invalid ADMIN_PASSWORD_HASH: {e}"));
                hash
            }
            None => {
                let plain = env_nonblank("ADMIN_PASSWORD")
                    .expect("ADMIN_PASSWORD_HASH or ADMIN_PASSWORD must be set");
                hash_password(&plain).expect("Failed to hash ADMIN_PASSWORD")
            }
        };

        Self {
            username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            password_hash,
        }
    }
}

impl SessionConfig {
    fn from_env() -> Self {
        Self {
            ttl_hours: env_parsed("SESSION_TTL_HOURS", DEFAULT_SESSION_TTL_HOURS),
            cookie_secure: env_parsed("SESSION_COOKIE_SECURE", false),
            cleanup_interval_secs: env_parsed(
                "SESSION_CLEANUP_INTERVAL_SECS",
                NonZeroU64::new(DEFAULT_CLEANUP_INTERVAL_SECS).unwrap_or(NonZeroU64::MIN),
            )
            .get(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            cookie_secure: false,
            cleanup_interval_secs: DEFAULT_CLEANUP_INTERVAL_SECS,
        }
    }
}

/// `key` parsed as `T`, or `default` when unset. Panics on a bad value.
fn env_parsed<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .unwrap_or_else(|e| panic!("{key} has invalid value '{raw}': {e}")),
        Err(_) => default,
    }
}

fn env_nonblank(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
