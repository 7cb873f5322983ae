//! Base-URL resolution for the calculation service.
//!
//! Pure function of the execution environment: no network access, no
//! ambient globals. The resolved config is passed explicitly to every
//! component that talks to the service.

use std::time::Duration;

/// Port the service listens on in every known deployment.
pub const DEFAULT_PORT: u16 = 8000;

/// Calculation calls wait this long before giving up; generous because the
/// hosted service cold-starts from sleep.
pub const DEFAULT_CALC_TIMEOUT: Duration = Duration::from_secs(90);

const LOCAL_BASE_URL: &str = "http://localhost:8000";

/// How to derive the base URL when not running against localhost.
///
/// Two deployment variants exist: same host as the page on a fixed port,
/// or a fixed URL configured outright. The rule is explicit configuration;
/// components never pick between the two on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BaseUrlRule {
    /// `scheme://host:port` from the current environment.
    SameHostPort(u16),
    /// A fully specified base URL (trailing slash tolerated).
    Fixed(String),
}

impl Default for BaseUrlRule {
    fn default() -> Self {
        Self::SameHostPort(DEFAULT_PORT)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    calc_timeout: Duration,
}

impl ApiConfig {
    /// Resolves the base URL from the current host.
    ///
    /// `localhost` and `127.0.0.1` always resolve to the local development
    /// endpoint regardless of the rule; anything else follows `rule`.
    pub fn resolve(
        scheme: &str,
        host: &str,
        rule: &BaseUrlRule,
    ) -> Self {
        let base_url = if host == "localhost" || host == "127.0.0.1" {
            LOCAL_BASE_URL.to_string()
        } else {
            match rule {
                BaseUrlRule::SameHostPort(port) => format!("{scheme}://{host}:{port}"),
                BaseUrlRule::Fixed(url) => url.trim_end_matches('/').to_string(),
            }
        };
        Self::with_base_url(base_url)
    }

    /// Uses an explicitly configured base URL, bypassing resolution.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            calc_timeout: DEFAULT_CALC_TIMEOUT,
        }
    }

    pub fn with_calc_timeout(
        mut self,
        timeout: Duration,
    ) -> Self {
        self.calc_timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn calc_timeout(&self) -> Duration {
        self.calc_timeout
    }

    pub fn endpoint(
        &self,
        path: &str,
    ) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::with_base_url(LOCAL_BASE_URL)
    }
}
