//! Repository for the `cakes` table.

use sqlx::PgPool;

use cakebox_core::types::DbId;

use crate::models::cake::{Cake, CreateCake, UpdateCake};

/// Column list for the `cakes` table.
const COLUMNS: &str = "id, name, base_price, allowed_shapes, allowed_flavors, \
    allowed_colors, allowed_designs, is_active, images, description, created_at, updated_at";

/// Provides CRUD operations for cake products.
pub struct CakeRepo;

impl CakeRepo {
    /// Insert a new cake product.
    pub async fn create(pool: &PgPool, input: &CreateCake) -> Result<Cake, sqlx::Error> {
        let insert_query = format!(
            "INSERT INTO cakes \
                (name, base_price, allowed_shapes, allowed_flavors, allowed_colors, \
                 allowed_designs, is_active, images, description) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, true), $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cake>(&insert_query)
            .bind(&input.name)
            .bind(input.base_price)
            .bind(&input.allowed_shapes)
            .bind(&input.allowed_flavors)
            .bind(&input.allowed_colors)
            .bind(&input.allowed_designs)
            .bind(input.is_active)
            .bind(&input.images)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a cake by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Cake>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cakes WHERE id = $1");
        sqlx::query_as::<_, Cake>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List cake products, optionally including soft-disabled ones.
    pub async fn list(pool: &PgPool, include_inactive: bool) -> Result<Vec<Cake>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM cakes ORDER BY name, id")
        } else {
            format!("SELECT {COLUMNS} FROM cakes WHERE is_active = true ORDER BY name, id")
        };
        sqlx::query_as::<_, Cake>(&query).fetch_all(pool).await
    }

    /// Update a cake product. Only non-`None` fields are applied; a present
    /// allow-list replaces the stored one wholesale.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCake,
    ) -> Result<Option<Cake>, sqlx::Error> {
        let update_query = format!(
            "UPDATE cakes SET \
                name = COALESCE($2, name), \
                base_price = COALESCE($3, base_price), \
                allowed_shapes = COALESCE($4, allowed_shapes), \
                allowed_flavors = COALESCE($5, allowed_flavors), \
                allowed_colors = COALESCE($6, allowed_colors), \
                allowed_designs = COALESCE($7, allowed_designs), \
                is_active = COALESCE($8, is_active), \
                images = COALESCE($9, images), \
                description = COALESCE($10, description), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Cake>(&update_query)
            .bind(id)
            .bind(&input.name)
            .bind(input.base_price)
            .bind(&input.allowed_shapes)
            .bind(&input.allowed_flavors)
            .bind(&input.allowed_colors)
            .bind(&input.allowed_designs)
            .bind(input.is_active)
            .bind(&input.images)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Soft-disable a cake product (set `is_active = false`).
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cakes SET is_active = false, updated_at = now() \
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
