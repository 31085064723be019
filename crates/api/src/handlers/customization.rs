//! Handlers for the `/customization` resource: resolved offer sets and
//! price quotes for in-progress configurations.
//!
//! The configuration travels as an explicit value between these endpoints
//! and order placement; the server keeps no in-progress selection state.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use cakebox_core::configuration::{self, CakeConfiguration};
use cakebox_core::error::CoreError;
use cakebox_core::options::OptionDimension;
use cakebox_core::ordering::{self, TYPE_CUSTOMIZED_CAKE};
use cakebox_core::resolver::{self, OfferedOptions};
use cakebox_core::types::{DbId, Money};
use cakebox_core::{assets, pricing};
use cakebox_db::models::cake::Cake;
use cakebox_db::repositories::{CakeRepo, OptionRepo};

use crate::error::{AppError, AppResult};
use crate::query::OfferedOptionsParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for a price quote.
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub config: CakeConfiguration,
    pub cake_id: Option<DbId>,
    /// Defaults to `CUSTOMIZED_CAKE`.
    pub order_type: Option<String>,
}

/// Price quote response: the effective base price, the configuration
/// price, and the total a placed order would charge (before any print
/// surcharge, which depends on an actual file upload).
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub base_price: Money,
    pub item_price: Money,
    pub delivery_fee: Money,
    pub total: Money,
}

/// Resolve the offered set for one dimension.
///
/// Assets on disk win for visual dimensions, then the active catalog, then
/// the static vocabulary; a product allow-list narrows the set with the
/// never-empty fallback.
async fn resolve_dimension(
    state: &AppState,
    dimension: OptionDimension,
    cake: Option<&Cake>,
) -> AppResult<Vec<String>> {
    let discovered = assets::available_slugs(&state.config.asset_root, dimension);
    let catalog = OptionRepo::active_slugs(&state.pool, dimension).await?;
    let allow_list = cake.map(|cake| match dimension {
        OptionDimension::Shape => cake.allowed_shapes.as_slice(),
        OptionDimension::Flavor => cake.allowed_flavors.as_slice(),
        OptionDimension::Color => cake.allowed_colors.as_slice(),
        OptionDimension::Design => cake.allowed_designs.as_slice(),
    });
    Ok(resolver::resolve_offered(
        dimension, &discovered, &catalog, allow_list,
    ))
}

/// Resolve the offered sets for all four dimensions.
pub async fn resolve_all(state: &AppState, cake: Option<&Cake>) -> AppResult<OfferedOptions> {
    Ok(OfferedOptions {
        shapes: resolve_dimension(state, OptionDimension::Shape, cake).await?,
        flavors: resolve_dimension(state, OptionDimension::Flavor, cake).await?,
        colors: resolve_dimension(state, OptionDimension::Color, cake).await?,
        designs: resolve_dimension(state, OptionDimension::Design, cake).await?,
    })
}

/// Fetch the cake for an optional id, erroring on a missing product.
pub async fn load_cake(state: &AppState, cake_id: Option<DbId>) -> AppResult<Option<Cake>> {
    match cake_id {
        Some(id) => {
            let cake = CakeRepo::find_by_id(&state.pool, id)
                .await?
                .ok_or(AppError::Core(CoreError::NotFound { entity: "Cake", id }))?;
            Ok(Some(cake))
        }
        None => Ok(None),
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/customization/options?cake_id=3
///
/// The resolved offer sets for a product context (or the unrestricted
/// sets when no `cake_id` is given).
pub async fn offered_options(
    State(state): State<AppState>,
    Query(params): Query<OfferedOptionsParams>,
) -> AppResult<impl IntoResponse> {
    let cake = load_cake(&state, params.cake_id).await?;
    let offered = resolve_all(&state, cake.as_ref()).await?;
    Ok(Json(DataResponse { data: offered }))
}

/// POST /api/v1/customization/quote
///
/// Price a configuration against the live catalog without persisting
/// anything. Validates the configuration against the same offer sets
/// order placement will use.
pub async fn quote(
    State(state): State<AppState>,
    Json(input): Json<QuoteRequest>,
) -> AppResult<impl IntoResponse> {
    let order_type = input
        .order_type
        .clone()
        .unwrap_or_else(|| TYPE_CUSTOMIZED_CAKE.to_string());
    ordering::validate_order_type(&order_type)?;

    let cake = load_cake(&state, input.cake_id).await?;
    let offered = resolve_all(&state, cake.as_ref()).await?;
    configuration::validate_configuration(&input.config, &offered)?;

    let base_price =
        ordering::resolve_base_price(&order_type, cake.as_ref().map(|c| c.base_price));
    let price_map = OptionRepo::price_map(&state.pool).await?;
    let item_price = pricing::calculate_price(&input.config, base_price, Some(&price_map));

    Ok(Json(DataResponse {
        data: QuoteResponse {
            base_price,
            item_price,
            delivery_fee: pricing::DELIVERY_FEE,
            total: item_price + pricing::DELIVERY_FEE,
        },
    }))
}
