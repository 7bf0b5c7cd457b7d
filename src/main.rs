use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookstall::config::Config;
use bookstall::state::AppState;
use bookstall::storage::AssetStore;
use bookstall::{db, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstall=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::from_env();

    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::create_dir_all(&config.content_root) {
        tracing::error!(
            "Failed to create content directory {}: {}",
            config.content_root,
            e
        );
        std::process::exit(1);
    }

    let state = AppState::new(db, AssetStore::new(&config.content_root));

    if let Err(e) = server::serve(state, config.port, &config.cors_allowed_origins).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
