//! Server Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use std::net::SocketAddr;
use std::time::Duration;

use admin::AdminConfig;
use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose;
use inventory::InventoryConfig;
use platform::password::HashParams;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SESSION_TTL_HOURS: u64 = 12;

/// Everything the server needs to start
#[derive(Debug)]
pub struct ApiConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub database_max_connections: u32,
    pub admin: AdminConfig,
    pub inventory: InventoryConfig,
}

impl ApiConfig {
    /// Load from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Load from an arbitrary lookup
    ///
    /// `development` relaxes the session secret (random when unset) and
    /// defaults `COOKIE_SECURE` to false.
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set in environment")?;

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let database_max_connections = parse_or(
            var("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
            "DATABASE_MAX_CONNECTIONS",
        )?;

        let mut admin = match var("SESSION_SECRET") {
            Some(secret_b64) => AdminConfig {
                session_secret: decode_secret(&secret_b64)?,
                ..AdminConfig::default()
            },
            None if development => {
                tracing::warn!("SESSION_SECRET not set, using a random secret");
                AdminConfig::with_random_secret()
            }
            None => bail!("SESSION_SECRET must be set in production"),
        };

        admin.cookie_secure = parse_or(var("COOKIE_SECURE"), !development, "COOKIE_SECURE")?;

        let ttl_hours: u64 = parse_or(
            var("SESSION_TTL_HOURS"),
            DEFAULT_SESSION_TTL_HOURS,
            "SESSION_TTL_HOURS",
        )?;
        if ttl_hours == 0 {
            bail!("SESSION_TTL_HOURS must be at least 1");
        }
        admin.session_ttl = Duration::from_secs(ttl_hours * 3600);

        admin.password_pepper = var("PASSWORD_PEPPER").map(String::into_bytes);

        let defaults = HashParams::default();
        admin.hash_params = HashParams {
            memory_kib: parse_or(var("ARGON2_MEMORY_KIB"), defaults.memory_kib, "ARGON2_MEMORY_KIB")?,
            iterations: parse_or(var("ARGON2_ITERATIONS"), defaults.iterations, "ARGON2_ITERATIONS")?,
            parallelism: parse_or(
                var("ARGON2_PARALLELISM"),
                defaults.parallelism,
                "ARGON2_PARALLELISM",
            )?,
        };

        Ok(Self {
            database_url,
            bind_addr,
            database_max_connections,
            admin,
            inventory: InventoryConfig::default(),
        })
    }
}

fn parse_or<T>(raw: Option<String>, default: T, key: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value")),
        None => Ok(default),
    }
}

fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(secret_b64.trim())
        .context("SESSION_SECRET must be base64")?;

    bytes
        .try_into()
        .map_err(|b: Vec<u8>| anyhow::anyhow!("SESSION_SECRET must decode to 32 bytes, got {}", b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)], development: bool) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned(), development)
    }

    #[test]
    fn test_database_url_required() {
        assert!(load(&[], true).is_err());
    }

    #[test]
    fn test_development_defaults() {
        let config = load(&[("DATABASE_URL", "postgres://localhost/inventory")], true).unwrap();
        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.database_max_connections, 5);
        assert!(!config.admin.cookie_secure);
        assert_eq!(config.admin.session_ttl, Duration::from_secs(12 * 3600));
        assert_eq!(config.inventory.page_size, 12);
        assert!(config.admin.password_pepper.is_none());
    }

    #[test]
    fn test_production_requires_secret() {
        let err = load(&[("DATABASE_URL", "postgres://db/inventory")], false).unwrap_err();
        assert!(err.to_string().contains("SESSION_SECRET"));

        let secret = general_purpose::STANDARD.encode([7u8; 32]);
        let config = load(
            &[
                ("DATABASE_URL", "postgres://db/inventory"),
                ("SESSION_SECRET", &secret),
            ],
            false,
        )
        .unwrap();
        assert_eq!(config.admin.session_secret, [7u8; 32]);
        assert!(config.admin.cookie_secure);
    }

    #[test]
    fn test_secret_must_be_32_bytes() {
        let short = general_purpose::STANDARD.encode([1u8; 16]);
        assert!(
            load(
                &[("DATABASE_URL", "postgres://db"), ("SESSION_SECRET", &short)],
                true
            )
            .is_err()
        );
    }

    #[test]
    fn test_overrides() {
        let config = load(
            &[
                ("DATABASE_URL", "postgres://db"),
                ("BIND_ADDR", "127.0.0.1:8080"),
                ("DATABASE_MAX_CONNECTIONS", "20"),
                ("COOKIE_SECURE", "true"),
                ("SESSION_TTL_HOURS", "2"),
                ("PASSWORD_PEPPER", "pepper"),
                ("ARGON2_MEMORY_KIB", "65536"),
                ("ARGON2_ITERATIONS", "3"),
            ],
            true,
        )
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.database_max_connections, 20);
        assert!(config.admin.cookie_secure);
        assert_eq!(config.admin.session_ttl, Duration::from_secs(7200));
        assert_eq!(config.admin.password_pepper.as_deref(), Some(&b"pepper"[..]));
        assert_eq!(config.admin.hash_params.memory_kib, 65536);
        assert_eq!(config.admin.hash_params.iterations, 3);
        assert_eq!(config.admin.hash_params.parallelism, 1);
    }

    #[test]
    fn test_invalid_number_is_rejected() {
        let err = load(
            &[("DATABASE_URL", "postgres://db"), ("SESSION_TTL_HOURS", "soon")],
            true,
        )
        .unwrap_err();
        assert!(err.to_string().contains("SESSION_TTL_HOURS"));
    }
}
