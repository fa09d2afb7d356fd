//! BG3 Companion Engine - Main entry point.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod infrastructure;

use app::App;
use infrastructure::assets::IconIndex;
use infrastructure::companion::CompanionDb;
use infrastructure::reference::ReferenceData;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from a .env if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bg3companion_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting BG3 Companion Engine");

    // Load configuration
    let data_dir: PathBuf = std::env::var("BG3_DATA_DIR")
        .unwrap_or_else(|_| "data".into())
        .into();
    let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let server_port: u16 = std::env::var("SERVER_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "8000".into())
        .parse()
        .unwrap_or(8000);

    // Companion database (user-editable tables)
    let companion_path = data_dir.join("bg3_companion.db");
    tracing::info!("Opening companion database at {}", companion_path.display());
    let db = CompanionDb::connect(&companion_path.to_string_lossy()).await?;

    // Reference catalogues, loaded once per process
    let reference = ReferenceData::load(&data_dir).await;

    // Icon manifest is optional
    let icons = match std::env::var("BG3_ICON_MANIFEST") {
        Ok(path) => IconIndex::from_manifest(std::path::Path::new(&path)),
        Err(_) => IconIndex::empty(),
    };

    let app = Arc::new(App::new(&db, reference, icons));

    // The reference pages are fetched from the SPA dev origin, so CORS is
    // wide open like the original service.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = api::routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app);

    let addr: SocketAddr = format!("{server_host}:{server_port}").parse()?;
    tracing::info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
