//! # mitigate-server
//!
//! HTTP surface for Mitigate. Every entity gets list, add, edit and delete
//! routes; `/insight/*` serves the correlation reports and `/` the dashboard
//! charts. Writes answer with `303 See Other` back to the entity list.
//!
//! The binary (`mitigate`) loads configuration, opens the store, runs the
//! citizen identifier normalization pass and then calls [`serve`].

pub mod cli;
pub mod error;
pub mod routes;
pub mod state;

use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
use tracing::info;

pub use error::AppError;
pub use routes::router;
pub use state::{AppState, SharedState};

/// Serve the application on `listener` until Ctrl+C or SIGTERM.
///
/// # Errors
///
/// Returns the I/O error that stopped the accept loop.
pub async fn serve(listener: TcpListener, state: SharedState) -> std::io::Result<()> {
    let app = router(state);
    if let Ok(address) = listener.local_addr() {
        info!(%address, "server running");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let interrupt = async {
        match ctrl_c().await {
            Ok(()) => info!("received Ctrl+C, shutting down"),
            Err(error) => {
                tracing::error!(%error, "failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received terminate signal, shutting down");
            }
            Err(error) => {
                tracing::error!(%error, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = interrupt => {},
        () = terminate => {},
    }
}
