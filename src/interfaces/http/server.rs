use super::routes::{AppState, router};
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;

/// Port the service always listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Listener configuration for the receipt API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
        }
    }
}

impl ServerConfig {
    /// Binds the configured address. Failing to bind is fatal to the caller.
    pub async fn bind(&self) -> io::Result<TcpListener> {
        TcpListener::bind(self.bind_addr).await
    }
}

/// Serves the receipt API on `listener` until the process is stopped.
pub async fn serve(listener: TcpListener, state: AppState) -> io::Result<()> {
    tracing::info!("Listening on {}...", listener.local_addr()?);
    axum::serve(listener, router(state)).await
}
