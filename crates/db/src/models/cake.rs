//! Cake product entity model and DTOs.
//!
//! Allow-lists hold option slugs but are deliberately not foreign keys:
//! the catalog and the product lists evolve independently and the option
//! resolver tolerates mismatches. Products are soft-disabled via
//! `is_active`, never deleted, so order history stays coherent.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use cakebox_core::types::{DbId, Money, Timestamp};

/// A row from the `cakes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Cake {
    pub id: DbId,
    pub name: String,
    pub base_price: Money,
    pub allowed_shapes: Vec<String>,
    pub allowed_flavors: Vec<String>,
    pub allowed_colors: Vec<String>,
    pub allowed_designs: Vec<String>,
    pub is_active: bool,
    /// Carousel image URLs, in display order.
    pub images: Vec<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a cake product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCake {
    pub name: String,
    pub base_price: Money,
    #[serde(default)]
    pub allowed_shapes: Vec<String>,
    #[serde(default)]
    pub allowed_flavors: Vec<String>,
    #[serde(default)]
    pub allowed_colors: Vec<String>,
    #[serde(default)]
    pub allowed_designs: Vec<String>,
    pub is_active: Option<bool>,
    #[serde(default)]
    pub images: Vec<String>,
    pub description: Option<String>,
}

/// DTO for updating a cake product. Only non-`None` fields are applied;
/// a present allow-list replaces the stored one wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCake {
    pub name: Option<String>,
    pub base_price: Option<Money>,
    pub allowed_shapes: Option<Vec<String>>,
    pub allowed_flavors: Option<Vec<String>>,
    pub allowed_colors: Option<Vec<String>>,
    pub allowed_designs: Option<Vec<String>>,
    pub is_active: Option<bool>,
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
}
