//! Order lifecycle constants and validation.
//!
//! Defines the order types, the status state machine, delivery-address
//! validation, and the order-level price assembly that sits on top of the
//! configuration price. The repository and API layers share these rules.

use serde::{Deserialize, Serialize};

use crate::configuration::CakeConfiguration;
use crate::error::CoreError;
use crate::pricing::{
    self, DEFAULT_BASE_PRICE, DELIVERY_FEE, PRINT_IMAGE_FEE, REFERENCE_PHOTO_BASE_PRICE,
};
use crate::types::Money;

// ---------------------------------------------------------------------------
// Order types
// ---------------------------------------------------------------------------

/// A catalog cake ordered as-is.
pub const TYPE_EXISTING_CAKE: &str = "EXISTING_CAKE";
/// A catalog cake with customer customization.
pub const TYPE_CUSTOMIZED_CAKE: &str = "CUSTOMIZED_CAKE";
/// A freeform order priced from a customer-supplied reference photo.
pub const TYPE_IMAGE_REFERENCE_CAKE: &str = "IMAGE_REFERENCE_CAKE";

/// All valid order types.
pub const VALID_ORDER_TYPES: &[&str] = &[
    TYPE_EXISTING_CAKE,
    TYPE_CUSTOMIZED_CAKE,
    TYPE_IMAGE_REFERENCE_CAKE,
];

/// Validate that an order type string is one of the accepted values.
pub fn validate_order_type(order_type: &str) -> Result<(), CoreError> {
    if VALID_ORDER_TYPES.contains(&order_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid order type '{order_type}'. Must be one of: {}",
            VALID_ORDER_TYPES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Status state machine
// ---------------------------------------------------------------------------

/// Initial status for every placed order.
pub const STATUS_PLACED: &str = "PLACED";
/// The kitchen has accepted the order and is working on it.
pub const STATUS_PREPARING: &str = "PREPARING";
/// The cake is ready for delivery.
pub const STATUS_READY: &str = "READY";
/// Delivered to the customer. Terminal.
pub const STATUS_DELIVERED: &str = "DELIVERED";
/// Rejected or withdrawn; carries a rejection reason. Terminal.
pub const STATUS_CANCELLED: &str = "CANCELLED";

/// All valid order statuses.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PLACED,
    STATUS_PREPARING,
    STATUS_READY,
    STATUS_DELIVERED,
    STATUS_CANCELLED,
];

/// Returns the set of statuses that `from_status` may transition to.
///
/// The data contract forbids only leaving a terminal state and moving to
/// self or an unknown status; skips and backward corrections between live
/// statuses are allowed. The admin UI is what narrows the visible next
/// step to the linear `PLACED -> PREPARING -> READY -> DELIVERED` flow.
pub fn valid_transitions(from_status: &str) -> &'static [&'static str] {
    match from_status {
        STATUS_PLACED => &[STATUS_PREPARING, STATUS_READY, STATUS_DELIVERED, STATUS_CANCELLED],
        STATUS_PREPARING => &[STATUS_PLACED, STATUS_READY, STATUS_DELIVERED, STATUS_CANCELLED],
        STATUS_READY => &[STATUS_PLACED, STATUS_PREPARING, STATUS_DELIVERED, STATUS_CANCELLED],
        // Terminal states.
        STATUS_DELIVERED | STATUS_CANCELLED => &[],
        _ => &[],
    }
}

/// Check whether a transition from `from` to `to` is valid.
pub fn can_transition(from: &str, to: &str) -> bool {
    valid_transitions(from).contains(&to)
}

/// Validate that a status string is one of the known statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid order status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate a status transition.
pub fn validate_transition(from: &str, to: &str) -> Result<(), CoreError> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(CoreError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Delivery address
// ---------------------------------------------------------------------------

/// A delivery address as entered by the customer, optionally enriched with
/// map-picker coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub house_no: String,
    pub street: String,
    #[serde(default)]
    pub landmark: Option<String>,
    pub city: String,
    pub zip: String,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl DeliveryAddress {
    /// Single-line rendering for receipts and the admin order view.
    pub fn formatted(&self) -> String {
        match self.landmark.as_deref().filter(|l| !l.trim().is_empty()) {
            Some(landmark) => format!(
                "{}, {}, {}, {} - {}",
                self.house_no, self.street, landmark, self.city, self.zip
            ),
            None => format!(
                "{}, {}, {} - {}",
                self.house_no, self.street, self.city, self.zip
            ),
        }
    }
}

/// Validate that the required address fields are present and non-blank.
pub fn validate_address(address: &DeliveryAddress) -> Result<(), CoreError> {
    let required = [
        ("house number", &address.house_no),
        ("street", &address.street),
        ("city", &address.city),
        ("zip", &address.zip),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Incomplete delivery address: missing {}",
            missing.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Price assembly
// ---------------------------------------------------------------------------

/// Resolve the effective base price for an order.
///
/// Priority: reference-photo orders use the fixed reference base price;
/// otherwise the referenced product's base price when one resolves;
/// otherwise the default constant.
pub fn resolve_base_price(order_type: &str, cake_base_price: Option<Money>) -> Money {
    if order_type == TYPE_IMAGE_REFERENCE_CAKE {
        REFERENCE_PHOTO_BASE_PRICE
    } else {
        cake_base_price.unwrap_or(DEFAULT_BASE_PRICE)
    }
}

/// Compute the final order price.
///
/// Configuration price plus the print-image surcharge (only when an image
/// was actually uploaded) plus the flat delivery charge. This is computed
/// once at order creation and stored; it is never recomputed from live
/// catalog data.
pub fn assemble_final_price(
    config: &CakeConfiguration,
    base_price: Money,
    price_map: Option<&pricing::PriceMap>,
) -> Money {
    let mut total = pricing::calculate_price(config, base_price, price_map);
    if config.print_image_url.is_some() {
        total += PRINT_IMAGE_FEE;
    }
    total + DELIVERY_FEE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::EggType;
    use assert_matches::assert_matches;

    fn config() -> CakeConfiguration {
        CakeConfiguration {
            shape: "round".to_string(),
            flavor: "vanilla".to_string(),
            color: "pastel_red".to_string(),
            design: "classic".to_string(),
            weight: "0.5 kg".to_string(),
            egg_type: EggType::Egg,
            message: None,
            notes: None,
            print_image_url: None,
            reference_image_url: None,
        }
    }

    fn address() -> DeliveryAddress {
        DeliveryAddress {
            house_no: "12B".to_string(),
            street: "Baker Street".to_string(),
            landmark: None,
            city: "Pune".to_string(),
            zip: "411001".to_string(),
            lat: None,
            lng: None,
        }
    }

    // -----------------------------------------------------------------------
    // State machine
    // -----------------------------------------------------------------------

    #[test]
    fn placed_reaches_every_live_status() {
        assert!(can_transition(STATUS_PLACED, STATUS_PREPARING));
        assert!(can_transition(STATUS_PLACED, STATUS_READY));
        assert!(can_transition(STATUS_PLACED, STATUS_DELIVERED));
        assert!(can_transition(STATUS_PLACED, STATUS_CANCELLED));
    }

    #[test]
    fn preparing_to_ready_to_delivered() {
        assert!(can_transition(STATUS_PREPARING, STATUS_READY));
        assert!(can_transition(STATUS_READY, STATUS_DELIVERED));
    }

    #[test]
    fn terminal_states_are_sinks() {
        for terminal in [STATUS_DELIVERED, STATUS_CANCELLED] {
            for target in VALID_STATUSES {
                assert!(
                    !can_transition(terminal, target),
                    "{terminal} -> {target} must be forbidden"
                );
            }
        }
    }

    #[test]
    fn transition_out_of_terminal_errors() {
        let err = validate_transition(STATUS_DELIVERED, STATUS_PREPARING).unwrap_err();
        assert_matches!(err, CoreError::InvalidTransition { .. });
    }

    #[test]
    fn live_statuses_allow_backward_corrections() {
        assert!(can_transition(STATUS_READY, STATUS_PREPARING));
        assert!(can_transition(STATUS_PREPARING, STATUS_PLACED));
    }

    #[test]
    fn self_transition_rejected() {
        for status in [STATUS_PLACED, STATUS_PREPARING, STATUS_READY] {
            assert!(!can_transition(status, status));
        }
    }

    #[test]
    fn unknown_status_has_no_transitions() {
        assert!(valid_transitions("SHIPPED").is_empty());
    }

    #[test]
    fn order_type_validation() {
        assert!(validate_order_type(TYPE_CUSTOMIZED_CAKE).is_ok());
        assert!(validate_order_type("BULK_CAKE").is_err());
    }

    // -----------------------------------------------------------------------
    // Address
    // -----------------------------------------------------------------------

    #[test]
    fn complete_address_accepted() {
        assert!(validate_address(&address()).is_ok());
    }

    #[test]
    fn missing_fields_listed_in_error() {
        let mut a = address();
        a.street = String::new();
        a.zip = "  ".to_string();
        let err = validate_address(&a).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("street"));
        assert!(msg.contains("zip"));
    }

    #[test]
    fn formatted_includes_landmark_when_present() {
        let mut a = address();
        assert_eq!(a.formatted(), "12B, Baker Street, Pune - 411001");
        a.landmark = Some("Opp. Clock Tower".to_string());
        assert_eq!(a.formatted(), "12B, Baker Street, Opp. Clock Tower, Pune - 411001");
    }

    // -----------------------------------------------------------------------
    // Price assembly
    // -----------------------------------------------------------------------

    #[test]
    fn base_price_priority() {
        assert_eq!(
            resolve_base_price(TYPE_IMAGE_REFERENCE_CAKE, Some(999)),
            REFERENCE_PHOTO_BASE_PRICE
        );
        assert_eq!(resolve_base_price(TYPE_CUSTOMIZED_CAKE, Some(250)), 250);
        assert_eq!(resolve_base_price(TYPE_CUSTOMIZED_CAKE, None), DEFAULT_BASE_PRICE);
    }

    #[test]
    fn final_price_adds_delivery_once() {
        let c = config();
        assert_eq!(assemble_final_price(&c, 30, None), 30 + DELIVERY_FEE);
    }

    #[test]
    fn print_image_surcharge_applies_only_when_attached() {
        let mut c = config();
        let without = assemble_final_price(&c, 30, None);
        c.print_image_url = Some("https://img.example/print.png".to_string());
        assert_eq!(assemble_final_price(&c, 30, None), without + PRINT_IMAGE_FEE);
    }
}
