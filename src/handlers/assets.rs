use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use crate::{
    error::{AppError, AppResult},
    export,
    models::{Asset, AssetFilters, CreateAsset, UpdateStatus},
    AppState,
};

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_asset(
    State(state): State<AppState>,
    payload: Result<Json<CreateAsset>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    let Json(payload) = payload?;
    let asset = state.service.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_assets(
    State(state): State<AppState>,
    filters: Result<Query<AssetFilters>, QueryRejection>,
) -> AppResult<Json<Vec<Asset>>> {
    let Query(filters) = filters?;
    let assets = state
        .service
        .list(
            filters.asset_type.as_deref(),
            filters.status.as_deref(),
            filters.search.as_deref(),
        )
        .await?;
    Ok(Json(assets))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_asset(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Asset>> {
    let Path(id) = id?;
    Ok(Json(state.service.get_by_id(id).await?))
}

// ── Update status ─────────────────────────────────────────────────────────────

pub async fn update_asset_status(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateStatus>, JsonRejection>,
) -> AppResult<Json<Asset>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let status = payload
        .status
        .ok_or_else(|| AppError::InvalidArgument("Status is required".to_string()))?;

    let asset = state
        .service
        .update_status(id, &status, payload.assigned_to.as_deref())
        .await?;
    Ok(Json(asset))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_asset(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.service.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /api/export/assets ────────────────────────────────────────────────────

pub async fn export_csv(State(state): State<AppState>) -> AppResult<Response> {
    let assets = state.service.list(None, None, None).await?;
    let csv = export::assets_to_csv(&assets)?;

    info!(count = assets.len(), "Exported assets as CSV");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"assets.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
