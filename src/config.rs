use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub jobs: JobsConfig,
    #[serde(default)]
    pub persist_insights: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "default_cache_ttl")]
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: default_cache_ttl(),
        }
    }
}

fn default_cache_ttl() -> u64 {
    900
}

/// Detection policy constants. Defaults are the production policy; they are
/// configurable so boundary scenarios can be exercised in tests, not because
/// deployments are expected to tune them.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct AnalyzerConfig {
    /// Minimum |z-score| for a group to count as anomalous.
    #[serde(default = "default_z_threshold")]
    pub z_threshold: f64,
    /// Trailing hours compared against the baseline.
    #[serde(default = "default_recent_hours")]
    pub recent_hours: usize,
    /// Total hours of history fetched per metric (baseline + recent).
    #[serde(default = "default_lookback_hours")]
    pub lookback_hours: u32,
    /// Nominal baseline length reported on insights. Descriptive only; the
    /// actual baseline is shorter when less history exists.
    #[serde(default = "default_baseline_hours")]
    pub baseline_hours_label: u32,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            z_threshold: default_z_threshold(),
            recent_hours: default_recent_hours(),
            lookback_hours: default_lookback_hours(),
            baseline_hours_label: default_baseline_hours(),
        }
    }
}

fn default_z_threshold() -> f64 {
    2.5
}

fn default_recent_hours() -> usize {
    6
}

fn default_lookback_hours() -> u32 {
    30
}

fn default_baseline_hours() -> u32 {
    24
}

#[derive(Debug, Deserialize, Clone)]
pub struct JobsConfig {
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_secs: u64,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: default_refresh_interval(),
        }
    }
}

fn default_refresh_interval() -> u64 {
    900
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("INSIGHTS").separator("__"))
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;
        Ok(app_config)
    }
}
