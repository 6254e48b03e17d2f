use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, fmt};

use attendance::shared::infrastructure::attendance_store::AttendanceStore;
use attendance::shared::infrastructure::attendance_store::in_memory::InMemoryAttendanceStore;
use attendance::shell::config::{SEED_ATTENDEES, ServerConfig};
use attendance::shell::http::router;
use attendance::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::default();

    // In-memory for now; counts reset on restart.
    let store: Arc<dyn AttendanceStore> = Arc::new(InMemoryAttendanceStore::seeded(
        SEED_ATTENDEES.iter().copied(),
    ));
    let app = router(AppState::new(store), &config.assets_dir);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("Server running on {}", config.public_url());
    tracing::info!("Open your browser and visit {}", config.public_url());
    axum::serve(listener, app).await?;
    Ok(())
}
