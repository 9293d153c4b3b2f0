//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::DEFAULT_CACHE_TTL_SECS;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Property snapshot TTL in seconds
    pub cache_ttl: u64,
    /// Directory the periodic jobs write their log files into
    pub job_log_dir: PathBuf,
    /// Heartbeat interval in seconds
    pub heartbeat_interval: u64,
    /// Low stock restock interval in seconds
    pub restock_interval: u64,
    /// Order reminder interval in seconds
    pub reminder_interval: u64,
    /// CRM report interval in seconds
    pub report_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CACHE_TTL` - Property snapshot TTL in seconds (default: 3600)
    /// - `JOB_LOG_DIR` - Directory for job log files (default: /tmp)
    /// - `HEARTBEAT_INTERVAL` - Heartbeat frequency in seconds (default: 300)
    /// - `RESTOCK_INTERVAL` - Restock frequency in seconds (default: 43200)
    /// - `REMINDER_INTERVAL` - Reminder frequency in seconds (default: 604800)
    /// - `REPORT_INTERVAL` - Report frequency in seconds (default: 604800)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            job_log_dir: env::var("JOB_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("/tmp")),
            heartbeat_interval: env::var("HEARTBEAT_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            restock_interval: env::var("RESTOCK_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(43_200),
            reminder_interval: env::var("REMINDER_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(604_800),
            report_interval: env::var("REPORT_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(604_800),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            cache_ttl: DEFAULT_CACHE_TTL_SECS,
            job_log_dir: PathBuf::from("/tmp"),
            heartbeat_interval: 300,
            restock_interval: 43_200,
            reminder_interval: 604_800,
            report_interval: 604_800,
        }
    }
}
