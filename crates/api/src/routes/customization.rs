//! Route definitions for customization offers and quotes.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::customization;
use crate::state::AppState;

/// Routes mounted at `/customization`.
///
/// ```text
/// GET  /options   -> offered_options (resolved offer sets)
/// POST /quote     -> quote (price a configuration)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/options", get(customization::offered_options))
        .route("/quote", post(customization::quote))
}
