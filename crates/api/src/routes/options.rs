//! Route definitions for the option catalog.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::options;
use crate::state::AppState;

/// Routes mounted at `/options`.
///
/// ```text
/// GET    /          -> list (active, price-sorted)
/// POST   /          -> create
/// GET    /all       -> list_all (admin)
/// POST   /seed      -> seed (admin)
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(options::list).post(options::create))
        .route("/all", get(options::list_all))
        .route("/seed", post(options::seed))
        .route("/{id}", put(options::update).delete(options::delete))
}
