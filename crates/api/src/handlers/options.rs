//! Handlers for the `/options` resource -- the customization catalog.
//!
//! Storefront reads are public; every mutation and the inactive-inclusive
//! listing require the admin role.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use cakebox_core::error::CoreError;
use cakebox_core::options::{self, OptionDimension};
use cakebox_core::types::DbId;
use cakebox_db::models::option::{CreateOption, UpdateOption};
use cakebox_db::repositories::OptionRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::RequireAdmin;
use crate::query::OptionTypeParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Parse the optional `type` query parameter into a dimension.
fn parse_dimension(params: &OptionTypeParams) -> Result<Option<OptionDimension>, CoreError> {
    params
        .option_type
        .as_deref()
        .map(OptionDimension::parse)
        .transpose()
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/options?type=flavor
///
/// List active options sorted by ascending price, cheapest first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<OptionTypeParams>,
) -> AppResult<impl IntoResponse> {
    let dimension = parse_dimension(&params)?;
    let listed = OptionRepo::list(&state.pool, dimension).await?;
    Ok(Json(DataResponse { data: listed }))
}

/// GET /api/v1/options/all?type=flavor
///
/// Admin view: every option including inactive ones.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<OptionTypeParams>,
) -> AppResult<impl IntoResponse> {
    let dimension = parse_dimension(&params)?;
    let listed = OptionRepo::list_all(&state.pool, dimension).await?;
    Ok(Json(DataResponse { data: listed }))
}

/// POST /api/v1/options
///
/// Create an option. The slug is derived from the name when not supplied;
/// a duplicate `(type, slug)` pair is rejected with 409.
pub async fn create(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateOption>,
) -> AppResult<impl IntoResponse> {
    OptionDimension::parse(&input.option_type)?;
    if input.price < 0 {
        return Err(AppError::Core(CoreError::Validation(
            "Option price must be non-negative".to_string(),
        )));
    }

    let slug = match &input.slug {
        Some(slug) => slug.clone(),
        None => options::slugify(&input.name),
    };
    options::validate_slug(&slug)?;

    let option = OptionRepo::create(&state.pool, &input, &slug).await?;
    tracing::info!(
        option_id = option.id,
        option_type = %option.option_type,
        slug = %option.slug,
        user_id = admin.user_id,
        "Catalog option created",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: option })))
}

/// PUT /api/v1/options/{id}
///
/// Update an option's name, price, active flag, image, or metadata.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOption>,
) -> AppResult<impl IntoResponse> {
    if input.price.is_some_and(|p| p < 0) {
        return Err(AppError::Core(CoreError::Validation(
            "Option price must be non-negative".to_string(),
        )));
    }

    let option = OptionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Option",
            id,
        }))?;
    Ok(Json(DataResponse { data: option }))
}

/// DELETE /api/v1/options/{id}
///
/// Hard-delete an option. Existing orders are untouched (they hold a
/// snapshot); in-flight carts degrade through the resolver fallback.
pub async fn delete(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = OptionRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(option_id = id, user_id = admin.user_id, "Catalog option deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Option",
            id,
        }))
    }
}

/// POST /api/v1/options/seed
///
/// Idempotently upsert the baseline option set.
pub async fn seed(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let count = OptionRepo::seed_defaults(&state.pool).await?;
    tracing::info!(count, user_id = admin.user_id, "Default options seeded");
    Ok(Json(DataResponse { data: count }))
}
