//! Order entity model and DTOs.
//!
//! The customization snapshot and delivery address are stored as JSONB so
//! the order is a self-contained record: later catalog or product edits
//! can never alter what was bought or for how much. `final_price` is
//! computed once by the order assembler and never recomputed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

use cakebox_core::configuration::CakeConfiguration;
use cakebox_core::ordering::DeliveryAddress;
use cakebox_core::types::{DbId, Money, Timestamp};

/// Customer contact details captured with the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub name: String,
    pub phone: String,
}

/// A row from the `orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Order {
    pub id: DbId,
    pub user_id: DbId,
    /// Absent for pure reference-photo orders.
    pub cake_id: Option<DbId>,
    pub order_type: String,
    /// Frozen copy of the configuration at submission time.
    pub customization_snapshot: Json<CakeConfiguration>,
    pub contact_details: Json<ContactDetails>,
    pub delivery_address: Json<DeliveryAddress>,
    pub delivery_date: NaiveDate,
    /// `HH:MM`, validated against the lead-time rule at creation.
    pub delivery_time: String,
    pub final_price: Money,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload assembled by the order assembler after validation and
/// price computation. Status always starts at `PLACED`.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: DbId,
    pub cake_id: Option<DbId>,
    pub order_type: String,
    pub customization_snapshot: CakeConfiguration,
    pub contact_details: ContactDetails,
    pub delivery_address: DeliveryAddress,
    pub delivery_date: NaiveDate,
    pub delivery_time: String,
    pub final_price: Money,
}
