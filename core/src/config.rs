//! Client configuration.
//!
//! Values can be set in code or read from the environment with
//! [`ClientConfig::from_env`]. Unparseable environment values are ignored
//! with a warning so a typo never prevents the client from starting.

use std::time::Duration;

pub const REQUEST_TIMEOUT_ENV: &str = "IMOBILIAR_REQUEST_TIMEOUT_SECS";
pub const RELEASE_TIMEOUT_ENV: &str = "IMOBILIAR_RELEASE_TIMEOUT_SECS";
pub const USER_AGENT_ENV: &str = "IMOBILIAR_USER_AGENT";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_RELEASE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Upper bound for a single round-trip when the caller passes no deadline.
    /// `None` disables the bound.
    pub request_timeout: Option<Duration>,
    /// Budget for the logout that tears a session down. It is independent of
    /// the caller's deadline so an expired entry still releases its session.
    pub release_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout: Some(DEFAULT_REQUEST_TIMEOUT),
            release_timeout: DEFAULT_RELEASE_TIMEOUT,
            user_agent: format!("imobiliar-core/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the `IMOBILIAR_*` environment variables.
    ///
    /// A request timeout of `0` disables the bound.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(secs) = lookup(REQUEST_TIMEOUT_ENV).and_then(|v| parse_secs(REQUEST_TIMEOUT_ENV, &v)) {
            config.request_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }
        if let Some(secs) = lookup(RELEASE_TIMEOUT_ENV).and_then(|v| parse_secs(RELEASE_TIMEOUT_ENV, &v)) {
            config.release_timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = lookup(USER_AGENT_ENV).filter(|v| !v.trim().is_empty()) {
            config.user_agent = agent;
        }
        config
    }
}

fn parse_secs(key: &str, value: &str) -> Option<u64> {
    match value.trim().parse() {
        Ok(secs) => Some(secs),
        Err(_) => {
            tracing::warn!(key, value, "ignoring non-numeric timeout");
            None
        }
    }
}
