//! Option offer resolution.
//!
//! Three sources can disagree about which options exist for a dimension:
//! the visual assets physically on disk, the database-backed option
//! catalog, and the static default vocabulary baked into the crate. On top
//! of that a product may carry an allow-list. This module reconciles all of
//! them with a fixed precedence and a fallback rule that guarantees the
//! customer is never shown an empty selector.

use crate::options::OptionDimension;

/// The resolved offer sets for all four dimensions, in base order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OfferedOptions {
    pub shapes: Vec<String>,
    pub flavors: Vec<String>,
    pub colors: Vec<String>,
    pub designs: Vec<String>,
}

impl OfferedOptions {
    /// The offered slugs for one dimension.
    pub fn for_dimension(&self, dimension: OptionDimension) -> &[String] {
        match dimension {
            OptionDimension::Shape => &self.shapes,
            OptionDimension::Flavor => &self.flavors,
            OptionDimension::Color => &self.colors,
            OptionDimension::Design => &self.designs,
        }
    }
}

/// Resolve the offered slugs for one dimension.
///
/// `discovered` is the set of asset slugs found on disk (only consulted
/// for visual dimensions), `catalog` the active slugs from the option
/// catalog, and `allow_list` the product's restriction if any.
///
/// 1. The base set is the discovered assets when the dimension is visual
///    and at least one asset exists; otherwise the catalog slugs; otherwise
///    (empty catalog) the static default vocabulary.
/// 2. No allow-list (or an empty one) means the product is unrestricted:
///    the base set is offered as-is.
/// 3. A non-empty intersection with the allow-list honours the restriction,
///    preserving base order.
/// 4. An empty intersection means the allow-list is stale (e.g. the product
///    predates the current assets). The base set is returned unchanged.
///    Showing too much beats showing a dead-end selector; this fallback is
///    deliberate policy, not a bug to fix.
pub fn resolve_offered(
    dimension: OptionDimension,
    discovered: &[String],
    catalog: &[String],
    allow_list: Option<&[String]>,
) -> Vec<String> {
    let base: Vec<String> = if dimension.is_visual() && !discovered.is_empty() {
        discovered.to_vec()
    } else if !catalog.is_empty() {
        catalog.to_vec()
    } else {
        dimension
            .default_slugs()
            .iter()
            .map(|s| s.to_string())
            .collect()
    };

    let allowed = match allow_list {
        Some(list) if !list.is_empty() => list,
        _ => return base,
    };

    let intersection: Vec<String> = base
        .iter()
        .filter(|slug| allowed.contains(slug))
        .cloned()
        .collect();

    if intersection.is_empty() {
        base
    } else {
        intersection
    }
}
