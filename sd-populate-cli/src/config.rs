//! Configuration module
//!
//! Settings for one run, assembled from the parsed command line.

use std::time::Duration;

use sd_populate_client::ClientConfig;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// API host, `host[:port]` or a full URL
    pub host: String,

    /// Print every request URL and trace HTTP connections
    pub debug: bool,

    /// Print request URLs without sending anything
    pub dry_run: bool,

    /// Call `GET /health` before publishing
    pub check_health: bool,

    /// Compare the server's target groups with the file after publishing
    pub verify: bool,

    /// Per-request timeout
    pub timeout: Option<Duration>,
}

impl Config {
    /// HTTP client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            verbose: self.debug,
            timeout: self.timeout,
        }
    }

    /// Whether request URLs should be printed before they are sent
    pub fn show_requests(&self) -> bool {
        self.debug || self.dry_run
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1:80".to_string(),
            debug: false,
            dry_run: false,
            check_health: false,
            verify: false,
            timeout: None,
        }
    }
}
