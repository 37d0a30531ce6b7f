//! Bound HTTP server with graceful shutdown

use std::io;
use std::net::SocketAddr;

use tokio::{
    net::{TcpListener, ToSocketAddrs},
    sync::oneshot,
    task::JoinHandle,
};

use crate::{create_router, AppState};

/// Handle to a server running in a background task.
///
/// Dropping the handle also begins a graceful shutdown.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<io::Result<()>>,
}

/// Bind `addr` and serve the book registry on it.
///
/// Port 0 picks an ephemeral port; read it back with
/// [`ServerHandle::local_addr`].
pub async fn spawn(addr: impl ToSocketAddrs, state: AppState) -> io::Result<ServerHandle> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let app = create_router(state);

    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            })
            .await
    });

    tracing::info!("Server listening on http://{}", local_addr);

    Ok(ServerHandle {
        local_addr,
        shutdown_tx,
        task,
    })
}

impl ServerHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL of the server, e.g. `http://127.0.0.1:41234`
    pub fn url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Stop accepting connections and wait for in-flight requests to finish
    pub async fn shutdown(self) -> io::Result<()> {
        // The receiver is gone only if the server already stopped
        let _ = self.shutdown_tx.send(());
        let result = self.task.await.map_err(io::Error::other)?;
        tracing::info!("Server on {} stopped", self.local_addr);
        result
    }
}
