//! Customization option entity model and DTOs.
//!
//! One row per `(type, slug)` pair; `uq_options_type_slug` enforces the
//! pair's uniqueness so concurrent creates race at the storage layer and
//! the loser surfaces a conflict. Orders never reference these rows --
//! they freeze a configuration snapshot -- so hard deletes are safe.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cakebox_core::types::{DbId, Money, Timestamp};

/// A row from the `options` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogOption {
    pub id: DbId,
    /// Dimension this option belongs to (`shape|flavor|color|design`).
    #[serde(rename = "type")]
    pub option_type: String,
    pub slug: String,
    pub name: String,
    /// Price delta in whole currency units, non-negative.
    pub price: Money,
    pub is_active: bool,
    /// Path or URL of the option's visual asset, if any.
    pub image: Option<String>,
    /// Open metadata map, e.g. `{"hex": "#fca5a5"}` for colors.
    pub metadata: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new option.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOption {
    #[serde(rename = "type")]
    pub option_type: String,
    /// Derived from `name` when absent.
    pub slug: Option<String>,
    pub name: String,
    #[serde(default)]
    pub price: Money,
    pub is_active: Option<bool>,
    pub image: Option<String>,
    pub metadata: Option<serde_json::Value>,
}

/// DTO for updating an option. `(type, slug)` identity is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOption {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub is_active: Option<bool>,
    pub image: Option<String>,
    pub metadata: Option<serde_json::Value>,
}
