use std::sync::Arc;

use crate::config::ServerConfig;
use crate::geo::ReverseGeocoder;
use crate::storage::BlobStorage;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: cakebox_db::DbPool,
    /// Server configuration (asset root, JWT secret, endpoints).
    pub config: Arc<ServerConfig>,
    /// Blob storage used for print/reference image uploads.
    pub storage: Arc<dyn BlobStorage>,
    /// Reverse geocoder for optional address enrichment.
    pub geocoder: Arc<ReverseGeocoder>,
}
