use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod service;
pub mod store;
pub mod validation;

use crate::service::AssetService;

/// Shared application state. Cheap to clone (the store sits behind an Arc).
#[derive(Clone)]
pub struct AppState {
    pub service: AssetService,
}

/// `enable_seed` mounts `POST /api/seed`, which writes random assets and must
/// stay off for real inventories.
pub fn build_router(state: AppState, enable_seed: bool) -> Router {
    let router = Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Assets ──────────────────────────────────────────────────────────
        .route(
            "/api/assets",
            get(handlers::assets::list_assets).post(handlers::assets::create_asset),
        )
        .route(
            "/api/assets/:id",
            get(handlers::assets::get_asset).delete(handlers::assets::delete_asset),
        )
        .route(
            "/api/assets/:id/status",
            patch(handlers::assets::update_asset_status),
        )

        // ── Export ──────────────────────────────────────────────────────────
        .route("/api/export/assets", get(handlers::assets::export_csv));

    // ── Seed (development only) ─────────────────────────────────────────────
    let router = if enable_seed {
        router.route("/api/seed", post(handlers::seed::seed_data))
    } else {
        router
    };

    // ── Middleware ──────────────────────────────────────────────────────────
    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
