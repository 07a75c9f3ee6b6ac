use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Seeded into the `admins` table on every start.
pub const DEFAULT_BOOTSTRAP_ADMIN_ID: i64 = 7727813191;
const DEFAULT_DATABASE_PATH: &str = "stats.db";
const DEFAULT_PENDING_TTL_SECS: u64 = 600;
const DEFAULT_DB_MAX_CONNECTIONS: usize = 3;

#[derive(Clone, Debug)]
pub struct BotConfig {
    pub token: String,
    pub admin_chat_id: Option<i64>,
    pub bootstrap_admin_id: i64,
    pub database_path: PathBuf,
    pub pending_ttl: Duration,
    pub db_max_connections: usize,
}

/// Loads `.env` into the process environment if present and returns its
/// path. Runs before logging is set up, so it reports instead of logging.
pub fn load_environment() -> Result<Option<PathBuf>> {
    match dotenv::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(anyhow!("failed to read .env: {}", e)),
    }
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("TELOXIDE_TOKEN")
            .or_else(|| lookup("BOT_TOKEN"))
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow!("TELOXIDE_TOKEN (or BOT_TOKEN) must be set"))?;

        let admin_chat_id = parse_or(&lookup, "ADMIN_CHAT_ID", 0i64)?;

        Ok(Self {
            token,
            admin_chat_id: (admin_chat_id != 0).then_some(admin_chat_id),
            bootstrap_admin_id: parse_or(&lookup, "BOOTSTRAP_ADMIN_ID", DEFAULT_BOOTSTRAP_ADMIN_ID)?,
            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            pending_ttl: Duration::from_secs(parse_or(
                &lookup,
                "PENDING_ACTION_TTL_SECS",
                DEFAULT_PENDING_TTL_SECS,
            )?),
            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_DB_MAX_CONNECTIONS)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BotConfig::from_lookup(lookup_from(&[("TELOXIDE_TOKEN", "123:abc")])).unwrap();

        assert_eq!(config.token, "123:abc");
        assert_eq!(config.admin_chat_id, None);
        assert_eq!(config.bootstrap_admin_id, DEFAULT_BOOTSTRAP_ADMIN_ID);
        assert_eq!(config.database_path, PathBuf::from("stats.db"));
        assert_eq!(config.pending_ttl, Duration::from_secs(600));
        assert_eq!(config.db_max_connections, 3);
    }

    #[test]
    fn test_bot_token_fallback() {
        let config = BotConfig::from_lookup(lookup_from(&[("BOT_TOKEN", "456:def")])).unwrap();
        assert_eq!(config.token, "456:def");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        assert!(BotConfig::from_lookup(lookup_from(&[])).is_err());
        assert!(BotConfig::from_lookup(lookup_from(&[("TELOXIDE_TOKEN", "  ")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("TELOXIDE_TOKEN", "t"),
            ("ADMIN_CHAT_ID", "-1001234"),
            ("BOOTSTRAP_ADMIN_ID", " 42 "),
            ("DATABASE_PATH", "/tmp/bot.db"),
            ("PENDING_ACTION_TTL_SECS", "30"),
            ("DB_MAX_CONNECTIONS", "1"),
        ]))
        .unwrap();

        assert_eq!(config.admin_chat_id, Some(-1001234));
        assert_eq!(config.bootstrap_admin_id, 42);
        assert_eq!(config.database_path, PathBuf::from("/tmp/bot.db"));
        assert_eq!(config.pending_ttl, Duration::from_secs(30));
        assert_eq!(config.db_max_connections, 1);
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let result = BotConfig::from_lookup(lookup_from(&[
            ("TELOXIDE_TOKEN", "t"),
            ("BOOTSTRAP_ADMIN_ID", "not-a-number"),
        ]));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("BOOTSTRAP_ADMIN_ID"), "{}", message);
    }

    #[test]
    #[serial]
    fn test_from_env() {
        // SAFETY: serialized with every other test that touches the environment.
        unsafe {
            env::set_var("TELOXIDE_TOKEN", "env:token");
            env::set_var("BOOTSTRAP_ADMIN_ID", "77");
        }

        let config = BotConfig::from_env().unwrap();

        unsafe {
            env::remove_var("TELOXIDE_TOKEN");
            env::remove_var("BOOTSTRAP_ADMIN_ID");
        }

        assert_eq!(config.token, "env:token");
        assert_eq!(config.bootstrap_admin_id, 77);
    }
}
