//! Skycast HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::{sync::Arc, time::Duration};

use application::{ForecastPort, ForecastService, GeocodingPort};
use infrastructure::{
    AppConfig, CensusGeocodingAdapter, LogFormat, NwsForecastAdapter, init_tracing,
};
use presentation_http::{AppState, cors_layer, create_router};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config is loaded first so its log format applies; problems are reported once logging is up
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let log_format = config.server.log_format.parse().unwrap_or(LogFormat::Text);
    init_tracing(log_format)?;

    info!("🌤️ Skycast v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Err(e) = &loaded {
        warn!("Failed to load config, using defaults: {}", e);
    }

    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        geocoder = %config.geocoding.base_url,
        weather = %config.weather.base_url,
        "Configuration loaded"
    );

    // One HTTP client per provider, shared by every request
    let geocoder: Arc<dyn GeocodingPort> = Arc::new(
        CensusGeocodingAdapter::new(&config.geocoding)
            .map_err(|e| anyhow::anyhow!("Failed to initialize geocoder: {e}"))?,
    );
    let weather: Arc<dyn ForecastPort> = Arc::new(
        NwsForecastAdapter::new(config.weather.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize weather client: {e}"))?,
    );

    let forecast_service = Arc::new(ForecastService::new(geocoder, weather));

    let state = AppState::new(forecast_service);

    let app = create_router(state).layer(cors_layer(&config.server));

    let addr = config.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("👋 Server shutdown complete");

    Ok(())
}

/// Wait for SIGINT or SIGTERM, then let in-flight requests drain until `timeout`
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }

    // Hard deadline in case a connection refuses to drain
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        warn!("⏳ Shutdown timeout of {:?} elapsed, exiting", timeout);
        std::process::exit(1);
    });
}
