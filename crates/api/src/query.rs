//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for catalog listing (`?type=shape`).
///
/// The `type` value is parsed into an `OptionDimension` in the handler so
/// an unknown dimension yields a 400 rather than an empty list.
#[derive(Debug, Deserialize)]
pub struct OptionTypeParams {
    #[serde(rename = "type")]
    pub option_type: Option<String>,
}

/// Query parameters for list endpoints that support an `include_inactive`
/// flag (admin views of soft-disabled rows).
#[derive(Debug, Deserialize)]
pub struct IncludeInactiveParams {
    #[serde(default)]
    pub include_inactive: bool,
}

/// Query parameters for the admin order listing (`?status=PLACED`).
#[derive(Debug, Deserialize)]
pub struct OrderListParams {
    pub status: Option<String>,
}

/// Query parameters for offer resolution (`?cake_id=3`).
#[derive(Debug, Deserialize)]
pub struct OfferedOptionsParams {
    pub cake_id: Option<i64>,
}
