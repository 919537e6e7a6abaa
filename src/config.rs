use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt: JwtConfig,
    /// Reject signups whose email is already registered.
    pub unique_emails: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let secret = var("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .context("JWT_SECRET must be set")?;
        let jwt = JwtConfig {
            secret,
            issuer: var("JWT_ISSUER").unwrap_or_else(|| "inkwell".into()),
            audience: var("JWT_AUDIENCE").unwrap_or_else(|| "inkwell-users".into()),
            ttl_minutes: parse_or(&var, "JWT_TTL_MINUTES", 60)?,
        };
        anyhow::ensure!(
            jwt.ttl_minutes > 0,
            "JWT_TTL_MINUTES must be positive, got {}",
            jwt.ttl_minutes
        );

        let unique_emails = match var("UNIQUE_EMAILS") {
            None => false,
            Some(v) => parse_bool(&v)
                .with_context(|| format!("UNIQUE_EMAILS: expected a boolean, got {v:?}"))?,
        };

        Ok(Self {
            database_url,
            db_max_connections: parse_or(&var, "DB_MAX_CONNECTIONS", 10)?,
            jwt,
            unique_emails,
        })
    }
}

fn parse_or<F, T>(var: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(v) => v.parse::<T>().with_context(|| format!("{key}: invalid value {v:?}")),
        None => Ok(default),
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
