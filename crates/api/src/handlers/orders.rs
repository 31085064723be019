//! Handlers for the `/orders` resource: placement, listing, and the
//! admin-driven status lifecycle.
//!
//! Order placement is the one multipart endpoint: the JSON payload rides
//! in a `payload` field next to optional `print_image` /
//! `reference_image` files. Images are uploaded to blob storage before
//! anything is persisted, so a failed upload aborts the order instead of
//! leaving one behind with a missing image.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use cakebox_core::configuration::{self, CakeConfiguration};
use cakebox_core::error::CoreError;
use cakebox_core::ordering::{
    self, DeliveryAddress, STATUS_CANCELLED, TYPE_CUSTOMIZED_CAKE, TYPE_IMAGE_REFERENCE_CAKE,
};
use cakebox_core::scheduling;
use cakebox_core::types::DbId;
use cakebox_db::models::order::{ContactDetails, NewOrder};
use cakebox_db::repositories::{OptionRepo, OrderRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::customization::{load_cake, resolve_all};
use crate::middleware::rbac::ROLE_ADMIN;
use crate::middleware::{AuthUser, RequireAdmin};
use crate::query::OrderListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// JSON payload of the multipart order placement request.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderRequest {
    pub cake_id: Option<DbId>,
    /// Defaults to `CUSTOMIZED_CAKE`.
    pub order_type: Option<String>,
    pub config: CakeConfiguration,
    pub contact: ContactDetails,
    pub address: DeliveryAddress,
    pub delivery_date: NaiveDate,
    pub delivery_time: String,
}

/// Request body for an admin status transition.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatus {
    pub status: String,
    pub rejection_reason: Option<String>,
}

/// One uploaded image: original filename (for the extension) and bytes.
struct UploadedFile {
    filename: String,
    bytes: Vec<u8>,
}

/// The parsed multipart request.
struct PlacementParts {
    payload: PlaceOrderRequest,
    print_image: Option<UploadedFile>,
    reference_image: Option<UploadedFile>,
}

/// Pull the payload JSON and optional image files out of the multipart
/// stream. Unknown fields are ignored.
async fn read_placement(mut multipart: Multipart) -> AppResult<PlacementParts> {
    let mut payload: Option<PlaceOrderRequest> = None;
    let mut print_image = None;
    let mut reference_image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "payload" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Unreadable payload field: {e}")))?;
                let parsed = serde_json::from_str(&text)
                    .map_err(|e| AppError::BadRequest(format!("Invalid order payload: {e}")))?;
                payload = Some(parsed);
            }
            "print_image" | "reference_image" => {
                let is_print = name == "print_image";
                let filename = field.file_name().unwrap_or("upload.png").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Unreadable image field: {e}")))?;
                if bytes.is_empty() {
                    continue;
                }
                let file = UploadedFile {
                    filename,
                    bytes: bytes.to_vec(),
                };
                if is_print {
                    print_image = Some(file);
                } else {
                    reference_image = Some(file);
                }
            }
            _ => {}
        }
    }

    let payload = payload
        .ok_or_else(|| AppError::BadRequest("Missing 'payload' multipart field".to_string()))?;

    Ok(PlacementParts {
        payload,
        print_image,
        reference_image,
    })
}

/// Upload an image under a fresh name, preserving the original extension.
async fn upload_image(state: &AppState, file: UploadedFile) -> Result<String, CoreError> {
    let extension = std::path::Path::new(&file.filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("png");
    let name = format!("{}.{extension}", Uuid::new_v4());
    state.storage.upload(&name, file.bytes).await
}

// ---------------------------------------------------------------------------
// POST /orders
// ---------------------------------------------------------------------------

/// Place an order.
///
/// Validates the schedule, address, and configuration, uploads any
/// attached images, resolves the effective base price, computes the final
/// price from the live catalog, and persists the order with a frozen
/// configuration snapshot.
pub async fn place_order(
    auth: AuthUser,
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let parts = read_placement(multipart).await?;
    let request = parts.payload;

    let order_type = request
        .order_type
        .unwrap_or_else(|| TYPE_CUSTOMIZED_CAKE.to_string());
    ordering::validate_order_type(&order_type)?;

    // A reference-photo order without a reference image cannot be made.
    if order_type == TYPE_IMAGE_REFERENCE_CAKE
        && parts.reference_image.is_none()
        && request.config.reference_image_url.is_none()
    {
        return Err(AppError::Core(CoreError::Validation(
            "Reference-photo orders require a reference image".to_string(),
        )));
    }

    // Address: enrich blank fields from the map pin, then validate.
    let address = state.geocoder.enrich(request.address).await;
    ordering::validate_address(&address)?;

    scheduling::validate_delivery_schedule(
        request.delivery_date,
        &request.delivery_time,
        Utc::now(),
    )?;

    let cake = load_cake(&state, request.cake_id).await?;
    let offered = resolve_all(&state, cake.as_ref()).await?;
    configuration::validate_configuration(&request.config, &offered)?;

    // Uploads run after all validation; an upload error aborts placement
    // with nothing persisted.
    let mut config = request.config;
    if let Some(file) = parts.print_image {
        config.print_image_url = Some(upload_image(&state, file).await?);
    }
    if let Some(file) = parts.reference_image {
        config.reference_image_url = Some(upload_image(&state, file).await?);
    }

    let base_price =
        ordering::resolve_base_price(&order_type, cake.as_ref().map(|c| c.base_price));
    let price_map = OptionRepo::price_map(&state.pool).await?;
    let final_price = ordering::assemble_final_price(&config, base_price, Some(&price_map));

    let order = OrderRepo::create(
        &state.pool,
        &NewOrder {
            user_id: auth.user_id,
            cake_id: cake.as_ref().map(|c| c.id),
            order_type,
            customization_snapshot: config,
            contact_details: request.contact,
            delivery_address: address,
            delivery_date: request.delivery_date,
            delivery_time: request.delivery_time,
            final_price,
        },
    )
    .await?;

    tracing::info!(
        order_id = order.id,
        user_id = auth.user_id,
        order_type = %order.order_type,
        final_price = order.final_price,
        "Order placed",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

// ---------------------------------------------------------------------------
// Listing / lookup
// ---------------------------------------------------------------------------

/// GET /api/v1/orders
///
/// The requesting user's orders, most recent first.
pub async fn list_mine(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let orders = OrderRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /api/v1/orders/all?status=PLACED
///
/// Admin listing of every order, optionally filtered by status.
pub async fn list_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Query(params): Query<OrderListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(status) = &params.status {
        ordering::validate_status(status)?;
    }
    let orders = OrderRepo::list_all(&state.pool, params.status.as_deref()).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /api/v1/orders/{id}
///
/// A single order; customers can only read their own.
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;

    if auth.role != ROLE_ADMIN && order.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only view your own orders".into(),
        )));
    }

    Ok(Json(DataResponse { data: order }))
}

// ---------------------------------------------------------------------------
// PUT /orders/{id}/status
// ---------------------------------------------------------------------------

/// Move an order through its status lifecycle. Admin only.
///
/// Cancellation requires a rejection reason. The update is guarded on the
/// status the transition was validated against, so two concurrent admin
/// actions cannot both apply.
pub async fn update_status(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrderStatus>,
) -> AppResult<impl IntoResponse> {
    ordering::validate_status(&input.status)?;

    let current = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Order",
            id,
        }))?;

    ordering::validate_transition(&current.status, &input.status)?;

    let rejection_reason = input
        .rejection_reason
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());
    if input.status == STATUS_CANCELLED && rejection_reason.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Cancelling an order requires a rejection reason".to_string(),
        )));
    }

    let updated = OrderRepo::update_status(
        &state.pool,
        id,
        &current.status,
        &input.status,
        rejection_reason,
    )
    .await?
    .ok_or(AppError::Core(CoreError::Conflict(
        "Order status changed concurrently; reload and retry".to_string(),
    )))?;

    tracing::info!(
        order_id = id,
        from = %current.status,
        to = %updated.status,
        user_id = admin.user_id,
        "Order status updated",
    );
    Ok(Json(DataResponse { data: updated }))
}
