mod config;
mod session;

use anyhow::Result;
use config::AppConfig;
use scorecast_client::PredictionClient;
use scorecast_services::{MatchForm, PredictorController};
use scorecast_store::JsonFileStore;
use scorecast_ui::TerminalView;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scorecast_rs=debug,scorecast_services=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("🚀 Starting Scorecast prediction console");

    // Load configuration
    let config = AppConfig::new()?;
    config.validate()?;
    info!("✅ Configuration loaded successfully");
    info!("🌐 Prediction service: {}", config.api_url());
    info!("🗂️ History file: {}", config.history_path().display());

    // A bad catalog makes the form unusable; treat it as a startup fault.
    let form = MatchForm::new(config.catalog.teams.clone(), config.catalog.leagues.clone())?;

    let mut controller = PredictorController::new(
        PredictionClient::new(config.api_url()),
        JsonFileStore::new(config.history_path()),
        TerminalView::new(),
        form,
    );
    controller.init()?;

    session::run(&mut controller).await?;

    info!("👋 Shutting down gracefully");
    Ok(())
}
