//! Route tree for the API.

pub mod cakes;
pub mod customization;
pub mod health;
pub mod options;
pub mod orders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /options                         list (public), create (admin)
/// /options/all                     list incl. inactive (admin)
/// /options/seed                    seed baseline set (admin)
/// /options/{id}                    update, delete (admin)
///
/// /cakes                           list active (public), create (admin)
/// /cakes/all                       list incl. inactive (admin)
/// /cakes/{id}                      get (public), update, deactivate (admin)
///
/// /customization/options           resolved offer sets (public)
/// /customization/quote             price quote (public)
///
/// /orders                          place (auth), list own (auth)
/// /orders/all                      list every order (admin)
/// /orders/{id}                     get own/any (auth/admin)
/// /orders/{id}/status              status transition (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/options", options::router())
        .nest("/cakes", cakes::router())
        .nest("/customization", customization::router())
        .nest("/orders", orders::router())
}
