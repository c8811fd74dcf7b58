use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

use portfolio::config::Config;
use portfolio::logging::init_tracing;
use portfolio::routes::build_router;
use portfolio::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    init_tracing(&config.rust_log);

    info!("Starting portfolio v{}", env!("CARGO_PKG_VERSION"));
    info!("Rendering for {:?}", config.app_env);

    let state = AppState::new(config.clone());
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
