use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spycat_api::config::{BreedApiConfig, ServerConfig};
use spycat_api::router::build_app_router;
use spycat_api::service::{CatService, MissionService};
use spycat_api::state::AppState;
use spycat_breeds::BreedCatalogApi;
use spycat_db::repositories::{PgCatRepo, PgMissionRepo, PgTargetRepo};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spycat_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = spycat_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    spycat_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    spycat_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Breed catalog client ---
    let breed_config = BreedApiConfig::from_env();
    tracing::info!(url = %breed_config.base_url, "Using breed catalog");
    let breed_api = Arc::new(BreedCatalogApi::new(
        breed_config.base_url,
        breed_config.api_key,
    ));

    // --- Repositories ---
    let cat_repo = Arc::new(PgCatRepo::new(pool.clone()));
    let mission_repo = Arc::new(PgMissionRepo::new(pool.clone()));
    let target_repo = Arc::new(PgTargetRepo::new(pool.clone()));

    // --- Services ---
    let cats = Arc::new(CatService::new(cat_repo.clone(), breed_api));
    let missions = Arc::new(MissionService::new(mission_repo, target_repo, cat_repo));

    // --- App state / router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        cats,
        missions,
    };
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
