use crate::http::ServerConfig;
use crate::logging::LogFormat;
use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

/// Score purchase receipts and serve their reward points over HTTP
#[derive(Parser, Debug)]
#[command(name = "receipt-points")]
#[command(about = "Score purchase receipts and serve their reward points over HTTP", long_about = None)]
pub struct CliArgs {
    /// Socket address to listen on
    #[arg(
        long = "bind",
        value_name = "ADDR",
        env = "RECEIPTS_BIND",
        default_value = "0.0.0.0:8080",
        help = "Address to listen on"
    )]
    pub bind: SocketAddr,

    /// Receipt store implementation
    #[arg(
        long = "store",
        value_name = "BACKEND",
        env = "RECEIPTS_STORE",
        default_value = "sharded",
        help = "Store backend: 'locked' for a single RwLock map or 'sharded' for a concurrent map"
    )]
    pub store: StoreBackend,

    /// Number of runtime worker threads
    #[arg(
        long = "workers",
        value_name = "COUNT",
        env = "RECEIPTS_WORKERS",
        help = "Number of worker threads handling requests (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Log output format
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        env = "RECEIPTS_LOG_FORMAT",
        default_value = "compact",
        help = "Log format: 'compact' for human-readable lines or 'json'"
    )]
    pub log_format: LogFormat,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", help = "Log points breakdowns and lookups")]
    pub verbose: bool,
}

/// Available receipt store implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StoreBackend {
    Locked,
    Sharded,
}

impl CliArgs {
    /// Create a ServerConfig from CLI arguments
    ///
    /// Falls back to defaults for anything not provided. A worker count of
    /// zero is replaced by the default with a warning.
    pub fn to_server_config(&self) -> ServerConfig {
        let default = ServerConfig::default();
        ServerConfig::new(
            self.bind,
            self.store,
            self.workers.unwrap_or(default.workers),
        )
    }
}
