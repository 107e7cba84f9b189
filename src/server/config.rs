use std::{net::SocketAddr, str::FromStr, time::Duration};

use url::Url;

use crate::server::error::config::ConfigError;

const DEFAULT_DATABASE_USER: &str = "postgres";
const DEFAULT_DATABASE_PASSWORD: &str = "postgres";
const DEFAULT_DATABASE_NAME: &str = "alira_db";
const DEFAULT_DATABASE_HOST: &str = "postgres";
const DEFAULT_DATABASE_PORT: u16 = 5432;
const DEFAULT_APP_NAME: &str = "Alira Backend";
const DEFAULT_API_PREFIX: &str = "/api/v1";
const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_ATTEMPTS: usize = 5;
const DEFAULT_CONNECT_RETRY_DELAY_SECS: u64 = 2;

/// Application settings, read once at startup and never mutated afterwards.
///
/// Shared read-only through `Arc<Config>` in the application state.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Effective database connection URL.
    pub database_url: String,

    pub app_name: String,
    pub debug: bool,
    /// Path prefix of versioned API routes, without a trailing slash.
    pub api_prefix: String,
    pub server_addr: SocketAddr,

    /// Upper bound of pooled database connections.
    pub database_max_connections: u32,
    /// How long a request waits for a pooled connection before failing.
    pub database_acquire_timeout: Duration,
    /// Connection attempts made at startup before giving up.
    pub database_connect_attempts: usize,
    pub database_connect_retry_delay: Duration,

    pub scheduler_enabled: bool,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to its value.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every variable was absent (default applied) or valid
    /// - `Err(ConfigError::MissingEnvVar)` - A required database setting is empty
    /// - `Err(ConfigError::InvalidEnvVar)` - A variable could not be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env { lookup };

        let database_url = match env.get("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => {
                Url::parse(&url).map_err(|e| invalid("DATABASE_URL", &url, e.to_string()))?;
                url
            }
            None => build_database_url(&env)?,
        };

        Ok(Self {
            database_url,
            app_name: env.get_or("APP_NAME", DEFAULT_APP_NAME),
            debug: env.parse_bool("DEBUG", true)?,
            api_prefix: parse_prefix(&env.get_or("API_V1_PREFIX", DEFAULT_API_PREFIX))?,
            server_addr: env.parse("SERVER_ADDR", DEFAULT_SERVER_ADDR.parse().ok())?,
            database_max_connections: env
                .parse("DATABASE_MAX_CONNECTIONS", Some(DEFAULT_MAX_CONNECTIONS))?,
            database_acquire_timeout: Duration::from_secs(
                env.parse("DATABASE_ACQUIRE_TIMEOUT_SECS", Some(DEFAULT_ACQUIRE_TIMEOUT_SECS))?,
            ),
            database_connect_attempts: env
                .parse("DATABASE_CONNECT_ATTEMPTS", Some(DEFAULT_CONNECT_ATTEMPTS))?
                .max(1),
            database_connect_retry_delay: Duration::from_secs(env.parse(
                "DATABASE_CONNECT_RETRY_DELAY_SECS",
                Some(DEFAULT_CONNECT_RETRY_DELAY_SECS),
            )?),
            scheduler_enabled: env.parse_bool("SCHEDULER_ENABLED", false)?,
        })
    }
}

struct Env<F> {
    lookup: F,
}

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
    }

    fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or_else(|| default.to_string())
    }

    fn required_or(&self, name: &str, default: &str) -> Result<String, ConfigError> {
        let value = self.get_or(name, default);
        if value.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar(name.to_string()));
        }
        Ok(value)
    }

    fn parse<T>(&self, name: &str, default: Option<T>) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match (self.get(name), default) {
            (Some(raw), _) => raw
                .trim()
                .parse()
                .map_err(|e: T::Err| invalid(name, &raw, e.to_string())),
            (None, Some(default)) => Ok(default),
            (None, None) => Err(ConfigError::MissingEnvVar(name.to_string())),
        }
    }

    fn parse_bool(&self, name: &str, default: bool) -> Result<bool, ConfigError> {
        let Some(raw) = self.get(name) else {
            return Ok(default);
        };
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(invalid(name, &raw, "expected a boolean")),
        }
    }
}

fn invalid(name: &str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Assembles a PostgreSQL URL from the individual `DATABASE_*` settings.
///
/// Credentials are percent-encoded, so passwords containing `@` or `/` survive.
fn build_database_url<F>(env: &Env<F>) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let user = env.required_or("DATABASE_USER", DEFAULT_DATABASE_USER)?;
    let password = env.get_or("DATABASE_PASSWORD", DEFAULT_DATABASE_PASSWORD);
    let host = env.required_or("DATABASE_HOST", DEFAULT_DATABASE_HOST)?;
    let port: u16 = env.parse("DATABASE_PORT", Some(DEFAULT_DATABASE_PORT))?;
    let name = env.required_or("DATABASE_NAME", DEFAULT_DATABASE_NAME)?;

    let mut url = Url::parse(&format!("postgres://{}:{}", host.trim(), port))
        .map_err(|e| invalid("DATABASE_HOST", &host, e.to_string()))?;
    url.set_username(&user)
        .map_err(|_| invalid("DATABASE_USER", &user, "cannot be used in a URL"))?;
    url.set_password(Some(&password))
        .map_err(|_| invalid("DATABASE_PASSWORD", "<redacted>", "cannot be used in a URL"))?;
    url.set_path(&name);

    Ok(url.to_string())
}

/// Normalizes the API prefix to a leading slash and no trailing slash.
///
/// `/` normalizes to the empty prefix, mounting API routes at the root.
fn parse_prefix(raw: &str) -> Result<String, ConfigError> {
    let prefix = raw.trim();
    if !prefix.starts_with('/') {
        return Err(invalid("API_V1_PREFIX", raw, "must start with '/'"));
    }
    Ok(prefix.trim_end_matches('/').to_string())
}
