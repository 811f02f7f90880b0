use std::sync::Arc;
use berth_api::{app, AppState};
use berth_store::{app_config::Config, InMemoryBookingRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "berth_api=debug,berth_store=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    tracing::info!(
        base_fare = config.fares.base_fare,
        stations = config.stations.len(),
        "Starting Berth API"
    );

    let repo = InMemoryBookingRepository::from_config(&config);
    let app = app(AppState::new(Arc::new(repo)));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
