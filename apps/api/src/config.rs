use anyhow::{bail, Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a present variable cannot be parsed.
#[derive(Debug, Clone)]
pub struct Config {
    /// Content store. `None` disables the `/posts` routes.
    pub database_url: Option<String>,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
    pub slug_cache_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let slug_cache_capacity = parse_env("SLUG_CACHE_CAPACITY", 512usize)?;
        if slug_cache_capacity == 0 {
            bail!("SLUG_CACHE_CAPACITY must be at least 1");
        }

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 5u32)?,
            port: parse_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            slug_cache_capacity,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable name so parallel tests never race.

    #[test]
    fn test_parse_env_default_when_unset() {
        let v: u16 = parse_env("SEO_API_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(v, 8080);
    }

    #[test]
    fn test_parse_env_reads_value() {
        std::env::set_var("SEO_API_TEST_CAPACITY", " 64 ");
        let v: usize = parse_env("SEO_API_TEST_CAPACITY", 512).unwrap();
        assert_eq!(v, 64);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("SEO_API_TEST_BAD_PORT", "eighty");
        let err = parse_env::<u16>("SEO_API_TEST_BAD_PORT", 8080).unwrap_err();
        assert!(err.to_string().contains("SEO_API_TEST_BAD_PORT"));
    }

    #[test]
    fn test_blank_optional_env_is_none() {
        std::env::set_var("SEO_API_TEST_BLANK_URL", "   ");
        assert!(optional_env("SEO_API_TEST_BLANK_URL").is_none());
    }
}
