use anyhow::{Context, Result};
use std::{env, sync::OnceLock, time::Duration};

/// Application configuration loaded at startup
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Device REST API configuration
    pub device: DeviceConfig,
}

#[derive(Clone)]
pub struct DeviceConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Get or load the application configuration
    ///
    /// Returns a reference to the cached configuration. On first call, it loads
    /// and validates all configuration from environment variables.
    ///
    /// # Panics
    /// Panics if configuration loading fails. The editor cannot reach a device
    /// without valid configuration.
    pub fn get() -> &'static Self {
        static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();
        APP_CONFIG.get_or_init(|| {
            Self::load_internal().expect("failed to load application configuration")
        })
    }

    fn load_internal() -> Result<Self> {
        let device = DeviceConfig::load()?;

        Ok(Self { device })
    }
}

impl DeviceConfig {
    const DEFAULT_BASE_URL: &str = "http://192.168.4.1";
    const DEFAULT_TIMEOUT_SECS: &str = "10";

    fn load() -> Result<Self> {
        let base_url =
            env::var("DEVICE_URL").unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());

        let access_token = env::var("DEVICE_ACCESS_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        let request_timeout = parse_timeout_secs(
            &env::var("DEVICE_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| Self::DEFAULT_TIMEOUT_SECS.to_string()),
        )?;

        Ok(Self {
            base_url,
            access_token,
            request_timeout,
        })
    }
}

// the token must not end up in logs
impl std::fmt::Debug for DeviceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn parse_timeout_secs(value: &str) -> Result<Duration> {
    let secs = value
        .parse::<u64>()
        .context("failed to parse DEVICE_REQUEST_TIMEOUT_SECS: invalid format")?;

    anyhow::ensure!(
        secs > 0,
        "failed to parse DEVICE_REQUEST_TIMEOUT_SECS: must be greater than 0"
    );

    Ok(Duration::from_secs(secs))
}
