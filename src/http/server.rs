//! Server lifecycle
//!
//! Builds the tokio runtime, binds the listener and serves the router until
//! Ctrl-C or SIGTERM, then drains in-flight requests.

use super::router;
use crate::cli::StoreBackend;
use crate::core::{create_store, ReceiptEngine};
use crate::types::ServerError;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Configuration for the HTTP server
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,
    /// Receipt store implementation
    pub store: StoreBackend,
    /// Number of runtime worker threads
    pub workers: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            store: StoreBackend::Sharded,
            workers: num_cpus::get(),
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfig with custom values
    pub fn new(bind: SocketAddr, store: StoreBackend, workers: usize) -> Self {
        let default = Self::default();

        let workers = if workers == 0 {
            warn!(
                "Invalid worker count ({}), using default ({})",
                workers, default.workers
            );
            default.workers
        } else {
            workers
        };

        Self {
            bind,
            store,
            workers,
        }
    }
}

/// Run the server to completion on a fresh multi-threaded runtime
///
/// # Errors
///
/// Returns `ServerError` if the runtime cannot be built, the address cannot
/// be bound, or serving fails.
pub fn run(config: ServerConfig) -> Result<(), ServerError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()
        .map_err(|e| ServerError::Runtime {
            message: e.to_string(),
        })?;

    runtime.block_on(serve(config))
}

/// Bind and serve until a shutdown signal arrives
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let engine = ReceiptEngine::new(create_store(config.store));

    let listener = TcpListener::bind(config.bind)
        .await
        .map_err(|e| ServerError::Bind {
            addr: config.bind.to_string(),
            message: e.to_string(),
        })?;
    let actual_addr = listener.local_addr()?;
    info!(
        bind = %actual_addr,
        store = ?config.store,
        workers = config.workers,
        "Listening"
    );

    axum::serve(listener, router(engine))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or on SIGTERM where available
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.store, StoreBackend::Sharded);
        assert_eq!(config.workers, num_cpus::get());
    }

    #[test]
    fn test_zero_workers_fall_back_to_default() {
        let bind = "127.0.0.1:0".parse().unwrap();
        let config = ServerConfig::new(bind, StoreBackend::Locked, 0);
        assert_eq!(config.workers, num_cpus::get());
        assert_eq!(config.store, StoreBackend::Locked);
    }

    #[test]
    fn test_bind_failure_is_reported() {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let addr = taken.local_addr().unwrap();

            let config = ServerConfig::new(addr, StoreBackend::Sharded, 1);
            match serve(config).await {
                Err(ServerError::Bind { addr: reported, .. }) => {
                    assert_eq!(reported, addr.to_string())
                }
                other => panic!("Expected Bind error, got {:?}", other),
            }
        });
    }
}
