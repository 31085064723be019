//! The cake configuration value type.
//!
//! One fully-typed record carries the customer's selection from the
//! configuration step through pricing to the frozen order snapshot. It is a
//! plain value: membership of each slug in the offered sets is enforced at
//! the resolver boundary via [`validate_configuration`], not inside the
//! type itself.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::resolver::OfferedOptions;

/// Recognized weight tiers, smallest first.
pub const WEIGHTS: &[&str] = &["0.5 kg", "1 kg", "1.5 kg", "2 kg"];

/// Default weight tier for a fresh configuration.
pub const DEFAULT_WEIGHT: &str = "0.5 kg";

/// Maximum length for the on-cake message.
pub const MAX_MESSAGE_LENGTH: usize = 120;

/// Maximum length for free-text preparation notes.
pub const MAX_NOTES_LENGTH: usize = 2_000;

/// Egg preference for the batter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EggType {
    Egg,
    Eggless,
}

/// A customer's cake selection.
///
/// Serializes to the JSONB snapshot stored on orders; every field the
/// storefront can set is present here so the snapshot is self-contained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CakeConfiguration {
    pub shape: String,
    pub flavor: String,
    pub color: String,
    pub design: String,
    /// One of [`WEIGHTS`]; unknown tiers price at multiplier 1.
    pub weight: String,
    pub egg_type: EggType,
    /// On-cake message; non-empty triggers the flat engraving fee.
    #[serde(default)]
    pub message: Option<String>,
    /// Preparation notes, no price effect.
    #[serde(default)]
    pub notes: Option<String>,
    /// Set after a successful print-image upload.
    #[serde(default)]
    pub print_image_url: Option<String>,
    /// Set after a successful reference-photo upload.
    #[serde(default)]
    pub reference_image_url: Option<String>,
}

impl CakeConfiguration {
    /// Whether a non-empty message was requested.
    pub fn has_message(&self) -> bool {
        self.message.as_deref().is_some_and(|m| !m.trim().is_empty())
    }
}

/// Validate a configuration against the offered sets for its context.
///
/// Every slug must belong to the corresponding resolved offer set, the
/// weight must be a known tier, and text fields must fit their limits.
pub fn validate_configuration(
    config: &CakeConfiguration,
    offered: &OfferedOptions,
) -> Result<(), CoreError> {
    check_membership("shape", &config.shape, &offered.shapes)?;
    check_membership("flavor", &config.flavor, &offered.flavors)?;
    check_membership("color", &config.color, &offered.colors)?;
    check_membership("design", &config.design, &offered.designs)?;

    if !WEIGHTS.contains(&config.weight.as_str()) {
        return Err(CoreError::Validation(format!(
            "Invalid weight '{}'. Must be one of: {}",
            config.weight,
            WEIGHTS.join(", ")
        )));
    }

    if let Some(message) = &config.message {
        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(CoreError::Validation(format!(
                "Message exceeds maximum length of {MAX_MESSAGE_LENGTH} characters"
            )));
        }
    }

    if let Some(notes) = &config.notes {
        if notes.len() > MAX_NOTES_LENGTH {
            return Err(CoreError::Validation(format!(
                "Notes exceed maximum length of {MAX_NOTES_LENGTH} characters"
            )));
        }
    }

    Ok(())
}

fn check_membership(field: &str, slug: &str, offered: &[String]) -> Result<(), CoreError> {
    if offered.iter().any(|s| s == slug) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid {field} '{slug}'. Offered: {}",
            offered.join(", ")
        )))
    }
}
