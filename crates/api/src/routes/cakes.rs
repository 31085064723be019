//! Route definitions for cake products.

use axum::routing::get;
use axum::Router;

use crate::handlers::cakes;
use crate::state::AppState;

/// Routes mounted at `/cakes`.
///
/// ```text
/// GET    /          -> list (storefront, active only)
/// POST   /          -> create (admin)
/// GET    /all       -> list_all (admin)
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update (admin)
/// DELETE /{id}      -> deactivate (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cakes::list).post(cakes::create))
        .route("/all", get(cakes::list_all))
        .route(
            "/{id}",
            get(cakes::get_by_id)
                .put(cakes::update)
                .delete(cakes::deactivate),
        )
}
