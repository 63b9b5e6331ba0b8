pub mod api;
pub mod catalog;
pub mod checker;
pub mod config;
pub mod models;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::server::{start_server_on, ServerError};
use crate::api::types::ApiContext;
use crate::catalog::ProcessCatalog;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

/// Serve the API on the configured address until Ctrl-C.
///
/// The catalog is loaded lazily by the first check request.
pub async fn run() -> Result<(), ServerError> {
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let addr = config::bind_addr().map_err(ServerError::Config)?;
    tracing::info!(
        data_dir = %config::data_dir().display(),
        "Disease data directory"
    );

    let ctx = ApiContext::new(Arc::new(ProcessCatalog));
    let mut server = start_server_on(ctx, addr).await?;
    tracing::info!(addr = %server.addr(), "Listening");

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {e}");
    }

    server.shutdown();
    server.wait().await;
    Ok(())
}
