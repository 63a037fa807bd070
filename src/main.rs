use std::net::{IpAddr, SocketAddr};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use bitunix_relay::{config, routes, AppState};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bitunix_relay=info,tower_http=info")),
        )
        .init();

    let settings = match config::load() {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let ip = match settings.host.parse::<IpAddr>() {
        Ok(ip) => ip,
        Err(e) => {
            tracing::error!("invalid HOST {:?}: {e}", settings.host);
            return ExitCode::FAILURE;
        }
    };
    let addr = SocketAddr::from((ip, settings.port));

    tracing::info!(base_url = %settings.bitunix.base_url, "relaying orders to bitunix");
    let app = routes::app(AppState::new(settings));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("could not bind {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!("listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("server error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
