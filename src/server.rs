use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::router;
use crate::clock::SystemClock;
use crate::config::ServerConfig;
use crate::fleet::service::FleetService;

/// Initialize tracing; `RUST_LOG` overrides the default `info` filter.
fn init_tracing() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

/// Serve the polling API on an already bound listener until the process is stopped.
pub async fn serve(listener: TcpListener, service: Arc<FleetService>) -> Result<(), Box<dyn Error>> {
    let app = router(service);
    axum::serve(listener, app).await?;
    Ok(())
}

pub async fn run() -> Result<(), Box<dyn Error>> {
    // Config first so `.env` can provide RUST_LOG.
    let config = ServerConfig::from_env()?;
    init_tracing()?;

    let service = Arc::new(FleetService::from_config(&config, Arc::new(SystemClock)));

    let listener = TcpListener::bind(config.listen_addr()).await?;
    match config.max_fleet_size {
        Some(cap) => info!("Server running at http://{} (fleet cap {})", listener.local_addr()?, cap),
        None => info!("Server running at http://{}", listener.local_addr()?),
    }

    serve(listener, service).await
}
