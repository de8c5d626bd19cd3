use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_base_url: String,
    pub download_dir: String,
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let config = Self {
            api_base_url: env::var("NAVIDENT_API_BASE_URL")
                .unwrap_or_else(|_| {
                    warn!("NAVIDENT_API_BASE_URL not set, using default");
                    "http://localhost:8080/api".to_string()
                }),
            download_dir: env::var("NAVIDENT_DOWNLOAD_DIR")
                .unwrap_or_else(|_| {
                    warn!("NAVIDENT_DOWNLOAD_DIR not set, using current directory");
                    ".".to_string()
                }),
            request_timeout_secs: env::var("NAVIDENT_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        };

        if !config.is_configured() {
            warn!("Application not fully configured - missing environment variables");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.api_base_url.is_empty()
    }
}
