use serde::Deserialize;

/// Default seed addresses used when no configuration file is given
pub const DEFAULT_SEEDS: &[&str] = &[
    "https://example.com/",
    "https://www.djangoproject.com/",
    "https://pypi.org/",
];

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Addresses the crawl starts from, in order
    #[serde(default = "default_seeds")]
    pub seeds: Vec<String>,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seeds: default_seeds(),
            crawler: CrawlerConfig::default(),
            user_agent: UserAgentConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Remaining depth given to every seed
    #[serde(default = "default_max_depth", rename = "max-depth")]
    pub max_depth: u32,

    /// Capacity of the concurrency gate (simultaneous fetches)
    #[serde(
        default = "default_max_concurrent_fetches",
        rename = "max-concurrent-fetches"
    )]
    pub max_concurrent_fetches: u32,

    /// Number of frontier items handled at once; defaults to the gate capacity
    #[serde(default)]
    pub workers: Option<u32>,

    /// Per-request timeout (seconds)
    #[serde(default = "default_request_timeout", rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl CrawlerConfig {
    /// Number of handler tasks the coordinator keeps in flight
    pub fn effective_workers(&self) -> usize {
        self.workers.unwrap_or(self.max_concurrent_fetches) as usize
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
            workers: None,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(default = "default_crawler_name", rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(default = "default_crawler_version", rename = "crawler-version")]
    pub crawler_version: String,
}

impl UserAgentConfig {
    /// Formats the User-Agent header value: `Name/Version`
    pub fn header_value(&self) -> String {
        format!("{}/{}", self.crawler_name, self.crawler_version)
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: default_crawler_name(),
            crawler_version: default_crawler_version(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_database_path", rename = "database-path")]
    pub database_path: String,

    /// Path to the log file; logs go to stderr when unset
    #[serde(default, rename = "log-path")]
    pub log_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            log_path: None,
        }
    }
}

fn default_seeds() -> Vec<String> {
    DEFAULT_SEEDS.iter().map(|s| s.to_string()).collect()
}

fn default_max_depth() -> u32 {
    2
}

fn default_max_concurrent_fetches() -> u32 {
    10
}

fn default_request_timeout() -> u64 {
    30
}

fn default_crawler_name() -> String {
    "Homebound".to_string()
}

fn default_crawler_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_database_path() -> String {
    "db/crawler.db".to_string()
}
