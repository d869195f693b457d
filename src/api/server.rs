//! HTTP server implementation

use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::Any;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::handlers::AppState;
use crate::api::routes;
use crate::Result;

/// Assemble the application router with its middleware layers
pub fn build_app(state: AppState, enable_cors: bool) -> Router {
    let mut app = Router::new()
        .nest("/api", routes::api_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new());

    if enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        app = app.layer(cors);
    }

    app
}

/// Start the API server
pub async fn serve_api(state: AppState, host: &str, port: u16, enable_cors: bool) -> Result<()> {
    info!("🚀 Starting journal assistant API server...");

    let app = build_app(state, enable_cors);
    if enable_cors {
        info!("✅ CORS enabled");
    }

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 API server listening on http://{}", addr);
    info!("Available endpoints:");
    info!("  GET  /api/health           - Health check");
    info!("  POST /api/ai/chat          - Chat with the writing assistant");
    info!("  GET  /api/ai/prompts       - List writing prompts");
    info!("  POST /api/ai/analyze-mood  - Mood of recent entries");
    info!("  GET  /api/ai/insights      - Journaling habit insights");
    info!("  POST /api/entries          - Create an entry");
    info!("  GET  /api/entries          - List active entries");
    info!("  GET  /api/entries/deleted  - List soft-deleted entries");
    info!("  DEL  /api/entries/:id      - Soft-delete an entry");
    info!("  PATCH /api/restore/:id     - Restore a deleted entry");

    axum::serve(listener, app).await?;

    Ok(())
}
