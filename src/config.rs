use anyhow::{Context, Result};
use std::collections::HashSet;
use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection string, e.g. "sqlite:./curtail.db"
    pub database_url: String,

    /// Host to bind the HTTP server to, e.g. "0.0.0.0"
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Source addresses allowed to use the write/list/delete endpoints.
    /// Everyone else is restricted to the public redirect route.
    pub allowed_ips: HashSet<IpAddr>,

    /// Whether to derive the client address from the X-Forwarded-For header.
    /// Off by default: the header is client-supplied and spoofable, so it is
    /// only honored when this instance sits behind a proxy that rewrites it.
    pub trust_forwarded_for: bool,
}

impl AppConfig {
    /// Load configuration from environment variables (populated by dotenvy before this is called).
    pub fn from_env() -> Result<Self> {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse::<u16>()
            .context("PORT must be a valid port number (1–65535)")?;

        let allowed_ips = std::env::var("ALLOWED_IPS")
            .unwrap_or_else(|_| "127.0.0.1".into())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<IpAddr>()
                    .with_context(|| format!("ALLOWED_IPS entry '{s}' is not an IP address"))
            })
            .collect::<Result<HashSet<IpAddr>>>()?;

        let trust_forwarded_for = std::env::var("TRUST_FORWARDED_FOR")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:./curtail.db".into()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port,
            allowed_ips,
            trust_forwarded_for,
        })
    }
}
