//! Repository for the `orders` table.

use sqlx::types::Json;
use sqlx::PgPool;

use cakebox_core::ordering::STATUS_PLACED;
use cakebox_core::types::DbId;

use crate::models::order::{NewOrder, Order};

/// Column list for the `orders` table.
const COLUMNS: &str = "id, user_id, cake_id, order_type, customization_snapshot, \
    contact_details, delivery_address, delivery_date, delivery_time, final_price, \
    status, rejection_reason, created_at, updated_at";

/// Provides creation, lookup, and status updates for orders.
///
/// Orders are never deleted; the only mutation after creation is a
/// status transition (with an optional rejection reason).
pub struct OrderRepo;

impl OrderRepo {
    /// Insert a new order with status `PLACED`.
    pub async fn create(pool: &PgPool, input: &NewOrder) -> Result<Order, sqlx::Error> {
        let insert_query = format!(
            "INSERT INTO orders \
                (user_id, cake_id, order_type, customization_snapshot, contact_details, \
                 delivery_address, delivery_date, delivery_time, final_price, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&insert_query)
            .bind(input.user_id)
            .bind(input.cake_id)
            .bind(&input.order_type)
            .bind(Json(&input.customization_snapshot))
            .bind(Json(&input.contact_details))
            .bind(Json(&input.delivery_address))
            .bind(input.delivery_date)
            .bind(&input.delivery_time)
            .bind(input.final_price)
            .bind(STATUS_PLACED)
            .fetch_one(pool)
            .await
    }

    /// Find an order by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Order>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM orders WHERE id = $1");
        sqlx::query_as::<_, Order>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one user's orders, most recent first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Order>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Order>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List every order (admin view), optionally filtered by status,
    /// most recent first.
    pub async fn list_all(pool: &PgPool, status: Option<&str>) -> Result<Vec<Order>, sqlx::Error> {
        let query = match status {
            Some(_) => format!(
                "SELECT {COLUMNS} FROM orders WHERE status = $1 \
                 ORDER BY created_at DESC, id DESC"
            ),
            None => format!("SELECT {COLUMNS} FROM orders ORDER BY created_at DESC, id DESC"),
        };
        let mut stmt = sqlx::query_as::<_, Order>(&query);
        if let Some(status) = status {
            stmt = stmt.bind(status);
        }
        stmt.fetch_all(pool).await
    }

    /// Apply a status transition that the caller has already validated
    /// against the state machine.
    ///
    /// The `expected_from` guard makes the read-modify-write safe under
    /// concurrent admin actions: if another request moved the order first,
    /// no row matches and `None` is returned.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        expected_from: &str,
        to: &str,
        rejection_reason: Option<&str>,
    ) -> Result<Option<Order>, sqlx::Error> {
        let update_query = format!(
            "UPDATE orders SET \
                status = $3, \
                rejection_reason = COALESCE($4, rejection_reason), \
                updated_at = now() \
             WHERE id = $1 AND status = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Order>(&update_query)
            .bind(id)
            .bind(expected_from)
            .bind(to)
            .bind(rejection_reason)
            .fetch_optional(pool)
            .await
    }
}
