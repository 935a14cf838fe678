use anyhow::{Context, Result};
use fitplan_core::Planner;
use fitplan_gateway::{config::Settings, serve, AppState};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Environment (.env is optional)
    dotenvy::dotenv().ok();

    // 2. Logging Setup
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    info!("Workout plan gateway initializing...");

    // 3. Configuration
    let settings = Settings::from_env()?;
    info!(
        model = %settings.openai_model,
        api_base = %settings.openai_base_url,
        "Completion API configured"
    );

    // 4. Planner (tolerates a missing key; requests fail instead)
    let planner = Planner::new(settings.completion_client());
    let state = AppState::new(planner);

    // 5. Start Server
    let addr = settings.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Gateway listening on {addr}...");

    serve(listener, state).await.context("server error")?;
    info!("Gateway shut down");
    Ok(())
}
