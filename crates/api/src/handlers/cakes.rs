//! Handlers for the `/cakes` resource -- sellable cake products.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use cakebox_core::error::CoreError;
use cakebox_core::types::DbId;
use cakebox_db::models::cake::{CreateCake, UpdateCake};
use cakebox_db::repositories::CakeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/cakes
///
/// Storefront listing: active products only.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let cakes = CakeRepo::list(&state.pool, false).await?;
    Ok(Json(DataResponse { data: cakes }))
}

/// GET /api/v1/cakes/all
///
/// Admin listing: includes soft-disabled products.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let cakes = CakeRepo::list(&state.pool, true).await?;
    Ok(Json(DataResponse { data: cakes }))
}

/// GET /api/v1/cakes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let cake = CakeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Cake", id }))?;
    Ok(Json(DataResponse { data: cake }))
}

/// POST /api/v1/cakes
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCake>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Cake name must not be empty".to_string(),
        )));
    }
    if input.base_price < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Base price must be non-negative".to_string(),
        )));
    }

    let cake = CakeRepo::create(&state.pool, &input).await?;
    tracing::info!(cake_id = cake.id, user_id = admin.user_id, "Cake product created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: cake })))
}

/// PUT /api/v1/cakes/{id}
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCake>,
) -> AppResult<impl IntoResponse> {
    if input.base_price.is_some_and(|p| p < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "Base price must be non-negative".to_string(),
        )));
    }

    let cake = CakeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Cake", id }))?;
    Ok(Json(DataResponse { data: cake }))
}

/// DELETE /api/v1/cakes/{id}
///
/// Soft-disable: the product disappears from the storefront but its rows
/// (and the orders referencing it) remain.
pub async fn deactivate(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deactivated = CakeRepo::deactivate(&state.pool, id).await?;
    if deactivated {
        tracing::info!(cake_id = id, user_id = admin.user_id, "Cake product deactivated");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Cake", id }))
    }
}
