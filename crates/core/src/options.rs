//! Customization dimensions and their static default vocabularies.
//!
//! The four dimensions are fixed: a cake is configured by shape, flavor,
//! color, and design (topping). The static slug lists below are the
//! last-resort source for the option resolver when neither the asset
//! directory nor a product allow-list narrows the offer; the live catalog
//! is seeded from the same vocabulary.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One axis of cake customization.
///
/// Serializes as the lowercase wire string used in the `options.type`
/// column and in query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionDimension {
    Shape,
    Flavor,
    Color,
    Design,
}

/// All dimensions, in display order.
pub const ALL_DIMENSIONS: [OptionDimension; 4] = [
    OptionDimension::Shape,
    OptionDimension::Flavor,
    OptionDimension::Color,
    OptionDimension::Design,
];

/// Default shape slugs (asset-backed).
pub const DEFAULT_SHAPES: &[&str] = &["round", "heart", "square", "mini_heart"];

/// Default flavor slugs.
pub const DEFAULT_FLAVORS: &[&str] = &["vanilla", "chocolate", "red_velvet", "lemon"];

/// Default color slugs. Pastels are the base palette; the plain names are
/// the premium tier carried over from the earlier catalog.
pub const DEFAULT_COLORS: &[&str] = &[
    "pastel_yellow",
    "pastel_red",
    "pastel_blue",
    "pastel_green",
    "red",
    "pink",
    "blue",
    "yellow",
];

/// Default design (topping) slugs (asset-backed).
pub const DEFAULT_DESIGNS: &[&str] = &[
    "classic", "modern", "drip", "naked", "zigzag", "gems", "swirl", "pearls",
];

impl OptionDimension {
    /// The wire/database string for this dimension.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionDimension::Shape => "shape",
            OptionDimension::Flavor => "flavor",
            OptionDimension::Color => "color",
            OptionDimension::Design => "design",
        }
    }

    /// Parse a wire string into a dimension.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "shape" => Ok(OptionDimension::Shape),
            "flavor" => Ok(OptionDimension::Flavor),
            "color" => Ok(OptionDimension::Color),
            "design" => Ok(OptionDimension::Design),
            other => Err(CoreError::Validation(format!(
                "Invalid option type '{other}'. Must be one of: shape, flavor, color, design"
            ))),
        }
    }

    /// Whether this dimension is backed by visual assets on disk.
    ///
    /// Shapes and designs render from SVG files; color and flavor have no
    /// asset dependency and always resolve from the catalog/static lists.
    pub fn is_visual(self) -> bool {
        matches!(self, OptionDimension::Shape | OptionDimension::Design)
    }

    /// Static default slug list for this dimension.
    pub fn default_slugs(self) -> &'static [&'static str] {
        match self {
            OptionDimension::Shape => DEFAULT_SHAPES,
            OptionDimension::Flavor => DEFAULT_FLAVORS,
            OptionDimension::Color => DEFAULT_COLORS,
            OptionDimension::Design => DEFAULT_DESIGNS,
        }
    }
}

impl std::fmt::Display for OptionDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive a slug from a display name.
///
/// Lowercases the name and collapses every run of non-alphanumeric
/// characters into a single `_`, trimming leading/trailing underscores:
/// `"Mini  Heart"` -> `"mini_heart"`, `"Choco-Fudge!"` -> `"choco_fudge"`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }

    slug
}

/// Validate a slug: non-empty, lowercase alphanumeric and underscores only.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".to_string()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}'. Must contain only lowercase letters, digits, and underscores"
        )));
    }
    Ok(())
}
