//! Price calculation for cake configurations.
//!
//! [`calculate_price`] is a pure function: configuration + base price +
//! price map in, total out. It never fails; an option slug it does not
//! recognize contributes a zero delta, so a stale cart or a just-deleted
//! catalog entry degrades to "no extra charge" instead of an error.
//!
//! Shape, flavor, and color deltas scale with the weight tier (more batter,
//! more ingredients). Design work and message engraving are flat labor
//! costs added after the multiplier. The print-image surcharge and the
//! delivery charge are order-level fees applied by the order assembler,
//! not here, because whether an image was actually attached is not a
//! property of the configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::configuration::CakeConfiguration;
use crate::options::OptionDimension;
use crate::types::Money;

/// Base price when no product and no special order type is in play.
pub const DEFAULT_BASE_PRICE: Money = 30;

/// Base price for reference-photo orders (priced per 0.5 kg tier).
pub const REFERENCE_PHOTO_BASE_PRICE: Money = 500;

/// Flat fee for an on-cake message.
pub const MESSAGE_FEE: Money = 5;

/// Flat surcharge when a print image is attached to the order.
pub const PRINT_IMAGE_FEE: Money = 5;

/// Flat delivery charge, applied once per placed order.
pub const DELIVERY_FEE: Money = 40;

/// Weight tiers and their batch multipliers.
pub const WEIGHT_MULTIPLIERS: &[(&str, Money)] =
    &[("0.5 kg", 1), ("1 kg", 2), ("1.5 kg", 3), ("2 kg", 4)];

/// The multiplier for a weight tier. Unknown tiers price at 1.
pub fn weight_multiplier(weight: &str) -> Money {
    WEIGHT_MULTIPLIERS
        .iter()
        .find(|(tier, _)| *tier == weight)
        .map(|(_, m)| *m)
        .unwrap_or(1)
}

/// Per-dimension slug -> price-delta table.
///
/// Built either from the static defaults ([`default_price_map`]) or from
/// the live option catalog. Lookups for unknown slugs return 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceMap {
    pub shape: HashMap<String, Money>,
    pub flavor: HashMap<String, Money>,
    pub color: HashMap<String, Money>,
    pub design: HashMap<String, Money>,
}

impl PriceMap {
    /// The price delta for a slug in one dimension; 0 when unknown.
    pub fn delta(&self, dimension: OptionDimension, slug: &str) -> Money {
        self.table(dimension).get(slug).copied().unwrap_or(0)
    }

    /// Record a delta for a slug.
    pub fn insert(&mut self, dimension: OptionDimension, slug: impl Into<String>, price: Money) {
        self.table_mut(dimension).insert(slug.into(), price);
    }

    fn table(&self, dimension: OptionDimension) -> &HashMap<String, Money> {
        match dimension {
            OptionDimension::Shape => &self.shape,
            OptionDimension::Flavor => &self.flavor,
            OptionDimension::Color => &self.color,
            OptionDimension::Design => &self.design,
        }
    }

    fn table_mut(&mut self, dimension: OptionDimension) -> &mut HashMap<String, Money> {
        match dimension {
            OptionDimension::Shape => &mut self.shape,
            OptionDimension::Flavor => &mut self.flavor,
            OptionDimension::Color => &mut self.color,
            OptionDimension::Design => &mut self.design,
        }
    }
}

/// The built-in price table matching the seeded option catalog.
pub fn default_price_map() -> PriceMap {
    let mut map = PriceMap::default();
    for (slug, price) in [
        ("round", 0),
        ("square", 5),
        ("heart", 10),
        ("mini_heart", 5),
    ] {
        map.insert(OptionDimension::Shape, slug, price);
    }
    for (slug, price) in [
        ("vanilla", 0),
        ("chocolate", 5),
        ("red_velvet", 8),
        ("lemon", 4),
    ] {
        map.insert(OptionDimension::Flavor, slug, price);
    }
    for (slug, price) in [
        ("pastel_yellow", 0),
        ("pastel_red", 0),
        ("pastel_blue", 0),
        ("pastel_green", 0),
        ("red", 2),
        ("pink", 2),
        ("blue", 2),
        ("yellow", 2),
    ] {
        map.insert(OptionDimension::Color, slug, price);
    }
    for (slug, price) in [
        ("classic", 0),
        ("modern", 10),
        ("drip", 15),
        ("naked", 5),
        ("zigzag", 15),
        ("gems", 20),
        ("swirl", 12),
        ("pearls", 18),
    ] {
        map.insert(OptionDimension::Design, slug, price);
    }
    map
}

/// Compute the configuration price.
///
/// `scalable = base_price + shape + flavor + color` deltas, multiplied by
/// the weight tier; design delta and the message fee are added flat on top.
/// With non-negative inputs the result is always >= `base_price`.
pub fn calculate_price(
    config: &CakeConfiguration,
    base_price: Money,
    price_map: Option<&PriceMap>,
) -> Money {
    let defaults;
    let map = match price_map {
        Some(map) => map,
        None => {
            defaults = default_price_map();
            &defaults
        }
    };

    let scalable = base_price
        + map.delta(OptionDimension::Shape, &config.shape)
        + map.delta(OptionDimension::Flavor, &config.flavor)
        + map.delta(OptionDimension::Color, &config.color);

    let mut total = scalable * weight_multiplier(&config.weight);

    total += map.delta(OptionDimension::Design, &config.design);
    if config.has_message() {
        total += MESSAGE_FEE;
    }

    total
}
