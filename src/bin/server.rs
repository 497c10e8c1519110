//! Number counting API server binary.
//!
//! # Environment Variables
//!
//! - `HOST`: bind host (default: 0.0.0.0)
//! - `PORT`: bind port (default: 5000)
//! - `DEBUG`: widen log filter to debug (default: false)
//! - `RUST_LOG`: explicit log filter, overrides `DEBUG`

use count_numbers::config::ServerConfig;
use count_numbers::server::create_router;
use count_numbers::utils::logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    logger::init_server_logger(config.debug);

    tracing::info!("Starting number counting API");
    tracing::debug!("Server config: {:?}", config);

    let app = create_router();

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
