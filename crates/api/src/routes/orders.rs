//! Route definitions for orders.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// Routes mounted at `/orders`.
///
/// ```text
/// GET  /              -> list_mine
/// POST /              -> place_order (multipart)
/// GET  /all           -> list_all (admin)
/// GET  /{id}          -> get_by_id (owner or admin)
/// PUT  /{id}/status   -> update_status (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list_mine).post(orders::place_order))
        .route("/all", get(orders::list_all))
        .route("/{id}", get(orders::get_by_id))
        .route("/{id}/status", put(orders::update_status))
}
