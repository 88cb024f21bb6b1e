//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Both binaries read the same struct.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;

use crate::domain::post_store::DEFAULT_ID_SEARCH_LIMIT;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// `"json"` (case-insensitive) selects JSON; anything else is pretty.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`ServiceConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Socket address the post API binds to (e.g. `0.0.0.0:5002`).
    pub listen_addr: SocketAddr,

    /// Socket address the presentation service binds to.
    pub frontend_listen_addr: SocketAddr,

    /// Directory holding `index.html` and its assets.
    pub static_dir: PathBuf,

    /// Whether the store starts with the sample posts.
    pub seed_posts: bool,

    /// Exclusive upper bound of the free-id search.
    pub id_search_limit: u64,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Log line format.
    pub log_format: LogFormat,
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is not set or cannot be
    /// parsed, except for the listen addresses.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` or `FRONTEND_LISTEN_ADDR` is set
    /// but cannot be parsed as a [`SocketAddr`].
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr = parse_addr("LISTEN_ADDR", "0.0.0.0:5002")?;
        let frontend_listen_addr = parse_addr("FRONTEND_LISTEN_ADDR", "0.0.0.0:5001")?;

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let seed_posts = parse_env_bool("SEED_POSTS", true);
        let id_search_limit = parse_env("POST_ID_SEARCH_LIMIT", DEFAULT_ID_SEARCH_LIMIT);
        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", 30);
        let log_format = std::env::var("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            frontend_listen_addr,
            static_dir,
            seed_posts,
            id_search_limit,
            request_timeout_secs,
            log_format,
        })
    }

    /// Per-request timeout as a [`Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_addr(key: &str, default: &str) -> anyhow::Result<SocketAddr> {
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse()
        .with_context(|| format!("{key} is not a socket address: {raw}"))
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key).ok().as_deref() {
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => true,
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => false,
        _ => default,
    }
}
