use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::{error::AppResult, seed, AppState};

const DEFAULT_SEED_COUNT: usize = 25;
const MAX_SEED_COUNT: usize = 1_000;

#[derive(Debug, Deserialize)]
pub struct SeedParams {
    pub count: Option<usize>,
}

// ── POST /api/seed (only mounted when ENABLE_SEED is set) ────────────────────

pub async fn seed_data(
    State(state): State<AppState>,
    params: Result<Query<SeedParams>, QueryRejection>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let Query(params) = params?;
    let count = params.count.unwrap_or(DEFAULT_SEED_COUNT).min(MAX_SEED_COUNT);

    let assets = seed::seed_assets(&state.service, count).await?;
    let total = state.service.count().await?;

    info!(seeded = assets.len(), total, "Seeded assets");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "seeded": assets.len(),
            "total": total,
        })),
    ))
}
