use std::time::Duration;

const DEFAULT_HOST: &str = "http://localhost:9200";
const DEFAULT_INDEX: &str = "cv-transcriptions";
const DEFAULT_TIMEOUT_MS: u64 = 60_000;

/// Where the search engine lives. Built once per service and passed in
/// explicitly, so tests can point it at a mock server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub host: String,
    pub index: String,
    pub request_timeout: Duration,
}

impl BackendConfig {
    pub fn new(host: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            index: index.into(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Reads `ES_HOST`, `ES_INDEX` and `ES_TIMEOUT_MS`, accepting the
    /// `NEXT_PUBLIC_` names used by older deployments.
    pub fn from_env() -> Self {
        let host = env_var(&["ES_HOST", "NEXT_PUBLIC_ES_HOST"]).unwrap_or(DEFAULT_HOST.to_string());
        let index = env_var(&["ES_INDEX", "NEXT_PUBLIC_ES_INDEX"]).unwrap_or(DEFAULT_INDEX.to_string());
        let timeout_ms = env_var(&["ES_TIMEOUT_MS"])
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_MS);
        Self { host, index, request_timeout: Duration::from_millis(timeout_ms) }
    }

    pub fn search_url(&self) -> String {
        format!("{}/{}/_search", self.host.trim_end_matches('/'), self.index)
    }
}

fn env_var(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .find(|v| !v.trim().is_empty())
}
