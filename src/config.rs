use crate::adapters::outbound::{ArcGisOnlineConfig, TransportConfig, DEFAULT_HOST};
use crate::domain::value_objects::DEFAULT_RESULT_LIMIT;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    // Provider settings
    pub source_country: Option<String>,
    pub use_ssl: bool,
    pub host: String,
    pub max_locations: usize,

    // Transport settings
    pub timeout_secs: u64,
    pub user_agent: String,

    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_country: None,
            use_ssl: false,
            host: DEFAULT_HOST.to_string(),
            max_locations: DEFAULT_RESULT_LIMIT,
            timeout_secs: 15,
            user_agent: TransportConfig::default().user_agent,
            debug: false,
        }
    }
}

impl Config {
    /// Settings for the ArcGIS Online provider.
    pub fn provider_config(&self) -> ArcGisOnlineConfig {
        ArcGisOnlineConfig {
            source_country: self.source_country.clone(),
            use_ssl: self.use_ssl,
            host: self.host.clone(),
        }
    }

    /// Settings for the HTTP transport.
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn load_config() -> anyhow::Result<Config> {
    let defaults = Config::default();

    let source_country = std::env::var("ARCGIS_SOURCE_COUNTRY")
        .ok()
        .filter(|v| !v.trim().is_empty());

    let use_ssl = std::env::var("ARCGIS_USE_SSL")
        .map(|v| v == "1" || v.to_lowercase() == "true")
        .unwrap_or(false);

    let host = std::env::var("ARCGIS_HOST").unwrap_or(defaults.host);

    let max_locations = std::env::var("ARCGIS_MAX_LOCATIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|n: &usize| *n > 0)
        .unwrap_or(defaults.max_locations);

    let timeout_secs = std::env::var("ARCGIS_TIMEOUT_SECS")
        .unwrap_or_else(|_| "15".to_string())
        .parse()
        .unwrap_or(defaults.timeout_secs);

    let user_agent = std::env::var("ARCGIS_USER_AGENT").unwrap_or(defaults.user_agent);

    let debug = std::env::var("DEBUG").is_ok();

    Ok(Config {
        source_country,
        use_ssl,
        host,
        max_locations,
        timeout_secs,
        user_agent,
        debug,
    })
}
