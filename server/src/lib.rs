//! Backend for the Mugsurvey site.
//!
//! Serves the JSON API the survey form and admin dashboard talk to, and the
//! built web bundle for every other path.
//!
//! | method | path | |
//! |---|---|---|
//! | POST | `/api/submit_survey` | store one response |
//! | GET | `/api/admin/data` | per-question means and the submissions list |
//! | GET | `/api/admin/response/{id}` | one stored row, 404 if unknown |
//! | GET | `/api/admin/export` | every row as a CSV download |
//!
//! Configuration comes from the environment, see [`config::Config`]. Without
//! Supabase credentials responses live in memory and vanish on restart.

use std::{path::Path, time::Duration};

use api::endpoints;
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub mod aggregate;
pub mod config;
pub mod error;
pub mod export;
pub mod records;
pub mod routes;
pub mod state;
pub mod store;

use config::Config;
use error::StartupError;
use routes::{admin_data_handler, admin_export_handler, admin_response_handler, submit_survey_handler};
use state::AppState;

pub async fn start_server() -> Result<(), StartupError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    info!("Loading configuration...");
    let config = Config::load()?;
    let state = AppState::from_config(&config)?;

    info!("Starting server...");
    let app = router(state, &config.site_dir);

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address).await?;
    info!("Server running on {address}, serving {}", config.site_dir.display());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

/// The JSON API alone.
pub fn api_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route(endpoints::SUBMIT_SURVEY, post(submit_survey_handler))
        .route(endpoints::ADMIN_DATA, get(admin_data_handler))
        .route(endpoints::ADMIN_RESPONSE, get(admin_response_handler))
        .route(endpoints::ADMIN_EXPORT, get(admin_export_handler))
        .layer(cors)
        .with_state(state)
}

/// The API plus the web bundle in `site_dir`. Unknown paths get `index.html`
/// so the client-side router can resolve `/survey`, `/admin` and friends.
pub fn router(state: AppState, site_dir: &Path) -> Router {
    let index = ServeFile::new(site_dir.join("index.html"));
    let site = ServeDir::new(site_dir).fallback(index);

    api_router(state)
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => tracing::error!("Failed to listen for Ctrl+C: {err}"),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::error!("Failed to install terminate handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
