use std::env;
use std::time::Duration;

use dotenv::dotenv;

const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub debug: bool,
}

/// Initializes the application configuration from `.env` and environment
/// variables, falling back to defaults. CLI overrides are exported as env
/// vars before this runs, so they win over `.env` entries.
pub fn init_app_config() -> AppConfig {
    dotenv().ok();

    let api_base_url =
        env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

    let timeout_ms = env::var("REQUEST_TIMEOUT_MS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS);

    AppConfig {
        api_base_url,
        request_timeout: Duration::from_millis(timeout_ms),
        debug: env::var("DEBUG").is_ok(),
    }
}
