/// Crate-level constants
pub const APP_NAME: &str = "rxgrid";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default backend base URL. The bundled extraction service listens on
/// port 8000; emulators and physical devices substitute their host address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default network timeout, applied to connect and to the whole request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Endpoint configuration for the remote extraction backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl BackendConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_localhost() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.connect_timeout_secs, 30);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn custom_base_url_keeps_default_timeouts() {
        let config = BackendConfig::new("http://192.168.1.100:8000");
        assert_eq!(config.base_url, "http://192.168.1.100:8000");
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.4.0");
    }
}
