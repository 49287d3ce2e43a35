mod handlers;
mod models;

use axum::{
    http::HeaderValue,
    response::Redirect,
    routing::{get, post},
    Router,
};
use common::domain::{catalog, ActivityDirectory};
use common::settings::Settings;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub struct AppState {
    pub directory: RwLock<ActivityDirectory>,
    pub settings: Settings,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::new().expect("Failed to load configuration");

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "api=debug,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let seed = catalog::load(settings.catalog_path.as_deref())?;
    tracing::info!("loaded catalog with {} activities", seed.len());

    let state = Arc::new(AppState {
        directory: RwLock::new(ActivityDirectory::new(seed)),
        settings: settings.clone(),
    });

    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

pub fn app(state: Arc<AppState>) -> Router {
    let cors = build_cors(&state.settings);
    let static_dir = state.settings.static_dir.clone();

    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .route("/activities", get(handlers::list_activities))
        .route(
            "/activities/:activity_name/signup",
            post(handlers::signup),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(handlers::unregister),
        )
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn build_cors(settings: &Settings) -> CorsLayer {
    let origin = settings
        .frontend_origin
        .as_ref()
        .and_then(|s| HeaderValue::from_str(s).ok());

    match (settings.debug, origin) {
        (false, Some(origin)) => CorsLayer::new()
            .allow_origin(origin)
            .allow_headers([axum::http::header::CONTENT_TYPE])
            .allow_methods(Any),
        _ => CorsLayer::permissive(),
    }
}
