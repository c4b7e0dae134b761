use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use roster_api::database::DatabaseManager;
use roster_api::handlers::{cohort, instructor};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = roster_api::config::config();
    tracing::info!("Starting Roster API in {:?} mode", config.environment);

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("ROSTER_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("🚀 Roster API server listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Resources
        .merge(cohort_routes())
        .merge(instructor_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn cohort_routes() -> Router {
    Router::new()
        .route("/cohort", get(cohort::cohort_list).post(cohort::cohort_create))
        .route(
            "/cohort/:id",
            get(cohort::cohort_show)
                .put(cohort::cohort_update)
                .delete(cohort::cohort_delete),
        )
}

fn instructor_routes() -> Router {
    Router::new()
        .route(
            "/instructor",
            get(instructor::instructor_list).post(instructor::instructor_create),
        )
        .route(
            "/instructor/:id",
            get(instructor::instructor_show)
                .put(instructor::instructor_update)
                .delete(instructor::instructor_delete),
        )
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "name": "Roster API",
        "version": version,
        "description": "Cohort and instructor management API built with Rust (Axum)",
        "endpoints": {
            "home": "/",
            "health": "/health",
            "cohort": "/cohort[/:id]",
            "instructor": "/instructor[/:id]?cohort=&q=&orderBy=",
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
