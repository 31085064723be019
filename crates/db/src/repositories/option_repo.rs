//! Repository for the `options` table.

use serde_json::json;
use sqlx::PgPool;

use cakebox_core::options::OptionDimension;
use cakebox_core::pricing::PriceMap;
use cakebox_core::types::{DbId, Money};

use crate::models::option::{CatalogOption, CreateOption, UpdateOption};

/// Column list for the `options` table.
const COLUMNS: &str =
    "id, option_type, slug, name, price, is_active, image, metadata, created_at, updated_at";

/// One entry of the baseline catalog seeded on first run.
struct SeedOption {
    dimension: OptionDimension,
    slug: &'static str,
    name: &'static str,
    price: Money,
    /// `(key, value)` folded into the metadata JSONB map.
    metadata: Option<(&'static str, &'static str)>,
}

const fn seed(
    dimension: OptionDimension,
    slug: &'static str,
    name: &'static str,
    price: Money,
) -> SeedOption {
    SeedOption {
        dimension,
        slug,
        name,
        price,
        metadata: None,
    }
}

/// The fixed baseline option set. Matches the built-in price table in
/// `cakebox_core::pricing`.
const SEED_OPTIONS: &[SeedOption] = &[
    seed(OptionDimension::Shape, "round", "Round", 0),
    seed(OptionDimension::Shape, "square", "Square", 5),
    seed(OptionDimension::Shape, "heart", "Heart", 10),
    seed(OptionDimension::Shape, "mini_heart", "Mini Heart", 5),
    SeedOption {
        dimension: OptionDimension::Flavor,
        slug: "vanilla",
        name: "Vanilla",
        price: 0,
        metadata: Some(("desc", "Classic Madagascan")),
    },
    SeedOption {
        dimension: OptionDimension::Flavor,
        slug: "chocolate",
        name: "Chocolate",
        price: 5,
        metadata: Some(("desc", "Rich Belgian Dark")),
    },
    SeedOption {
        dimension: OptionDimension::Flavor,
        slug: "red_velvet",
        name: "Red Velvet",
        price: 8,
        metadata: Some(("desc", "Cream Cheese Frosting")),
    },
    SeedOption {
        dimension: OptionDimension::Flavor,
        slug: "lemon",
        name: "Lemon",
        price: 4,
        metadata: Some(("desc", "Zesty Lemon Curd")),
    },
    SeedOption {
        dimension: OptionDimension::Color,
        slug: "pastel_yellow",
        name: "Pastel Yellow",
        price: 0,
        metadata: Some(("hex", "#fde68a")),
    },
    SeedOption {
        dimension: OptionDimension::Color,
        slug: "pastel_red",
        name: "Pastel Red",
        price: 0,
        metadata: Some(("hex", "#fca5a5")),
    },
    SeedOption {
        dimension: OptionDimension::Color,
        slug: "pastel_blue",
        name: "Pastel Blue",
        price: 0,
        metadata: Some(("hex", "#93c5fd")),
    },
    SeedOption {
        dimension: OptionDimension::Color,
        slug: "pastel_green",
        name: "Pastel Green",
        price: 0,
        metadata: Some(("hex", "#86efac")),
    },
    SeedOption {
        dimension: OptionDimension::Color,
        slug: "red",
        name: "Red",
        price: 2,
        metadata: Some(("hex", "#ef4444")),
    },
    SeedOption {
        dimension: OptionDimension::Color,
        slug: "pink",
        name: "Pink",
        price: 2,
        metadata: Some(("hex", "#f472b6")),
    },
    SeedOption {
        dimension: OptionDimension::Color,
        slug: "blue",
        name: "Blue",
        price: 2,
        metadata: Some(("hex", "#3b82f6")),
    },
    SeedOption {
        dimension: OptionDimension::Color,
        slug: "yellow",
        name: "Yellow",
        price: 2,
        metadata: Some(("hex", "#eab308")),
    },
    seed(OptionDimension::Design, "classic", "Classic", 0),
    seed(OptionDimension::Design, "modern", "Modern", 10),
    seed(OptionDimension::Design, "drip", "Drip", 15),
    seed(OptionDimension::Design, "naked", "Naked", 5),
    seed(OptionDimension::Design, "zigzag", "Zigzag", 15),
    seed(OptionDimension::Design, "gems", "Gems", 20),
    seed(OptionDimension::Design, "swirl", "Swirl", 12),
    seed(OptionDimension::Design, "pearls", "Pearls", 18),
];

/// Default asset path for a seeded visual option.
fn seed_image_path(dimension: OptionDimension, slug: &str) -> Option<String> {
    match dimension {
        OptionDimension::Shape => Some(format!("/cake/shapes/{slug}.svg")),
        OptionDimension::Design => Some(format!("/cake/toppings/{slug}.svg")),
        OptionDimension::Flavor | OptionDimension::Color => None,
    }
}

/// Provides CRUD, seeding, and price-map queries for catalog options.
pub struct OptionRepo;

impl OptionRepo {
    /// List active options, optionally for one dimension, sorted by
    /// ascending price with ties broken by insertion order.
    pub async fn list(
        pool: &PgPool,
        dimension: Option<OptionDimension>,
    ) -> Result<Vec<CatalogOption>, sqlx::Error> {
        Self::list_inner(pool, dimension, false).await
    }

    /// List every option including inactive ones (admin view).
    pub async fn list_all(
        pool: &PgPool,
        dimension: Option<OptionDimension>,
    ) -> Result<Vec<CatalogOption>, sqlx::Error> {
        Self::list_inner(pool, dimension, true).await
    }

    async fn list_inner(
        pool: &PgPool,
        dimension: Option<OptionDimension>,
        include_inactive: bool,
    ) -> Result<Vec<CatalogOption>, sqlx::Error> {
        let mut query = format!("SELECT {COLUMNS} FROM options");
        let mut clauses = Vec::new();
        if !include_inactive {
            clauses.push("is_active = true".to_string());
        }
        if dimension.is_some() {
            clauses.push("option_type = $1".to_string());
        }
        if !clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&clauses.join(" AND "));
        }
        query.push_str(" ORDER BY price, id");

        let mut stmt = sqlx::query_as::<_, CatalogOption>(&query);
        if let Some(dimension) = dimension {
            stmt = stmt.bind(dimension.as_str());
        }
        stmt.fetch_all(pool).await
    }

    /// Find an option by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CatalogOption>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM options WHERE id = $1");
        sqlx::query_as::<_, CatalogOption>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new option.
    ///
    /// The slug is derived from the name when not supplied. A `(type, slug)`
    /// collision -- including the loser of a concurrent create -- fails on
    /// `uq_options_type_slug` and surfaces as a database error the API
    /// layer classifies as a conflict.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOption,
        slug: &str,
    ) -> Result<CatalogOption, sqlx::Error> {
        let insert_query = format!(
            "INSERT INTO options (option_type, slug, name, price, is_active, image, metadata) \
             VALUES ($1, $2, $3, $4, COALESCE($5, true), $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogOption>(&insert_query)
            .bind(&input.option_type)
            .bind(slug)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.is_active)
            .bind(&input.image)
            .bind(&input.metadata)
            .fetch_one(pool)
            .await
    }

    /// Update an option. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOption,
    ) -> Result<Option<CatalogOption>, sqlx::Error> {
        let update_query = format!(
            "UPDATE options SET \
                name = COALESCE($2, name), \
                price = COALESCE($3, price), \
                is_active = COALESCE($4, is_active), \
                image = COALESCE($5, image), \
                metadata = COALESCE($6, metadata), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CatalogOption>(&update_query)
            .bind(id)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.is_active)
            .bind(&input.image)
            .bind(&input.metadata)
            .fetch_optional(pool)
            .await
    }

    /// Hard-delete an option. Returns `true` if a row was removed.
    ///
    /// In-flight carts referencing the deleted slug degrade through the
    /// resolver fallback and the calculator's zero-delta rule.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM options WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Idempotently upsert the fixed baseline option set.
    ///
    /// Keyed on `(option_type, slug)`; re-running refreshes name, price,
    /// image, and metadata, and reactivates the entry. Returns the number
    /// of seeded rows.
    pub async fn seed_defaults(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let mut count = 0;
        for entry in SEED_OPTIONS {
            let metadata = entry.metadata.map(|(key, value)| json!({ key: value }));
            sqlx::query(
                "INSERT INTO options (option_type, slug, name, price, is_active, image, metadata) \
                 VALUES ($1, $2, $3, $4, true, $5, $6) \
                 ON CONFLICT (option_type, slug) DO UPDATE SET \
                    name = EXCLUDED.name, \
                    price = EXCLUDED.price, \
                    is_active = true, \
                    image = EXCLUDED.image, \
                    metadata = EXCLUDED.metadata, \
                    updated_at = now()",
            )
            .bind(entry.dimension.as_str())
            .bind(entry.slug)
            .bind(entry.name)
            .bind(entry.price)
            .bind(seed_image_path(entry.dimension, entry.slug))
            .bind(metadata)
            .execute(pool)
            .await?;
            count += 1;
        }
        tracing::info!(count, "Seeded default options");
        Ok(count)
    }

    /// Active slugs for one dimension, in catalog order.
    pub async fn active_slugs(
        pool: &PgPool,
        dimension: OptionDimension,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT slug FROM options \
             WHERE option_type = $1 AND is_active = true \
             ORDER BY price, id",
        )
        .bind(dimension.as_str())
        .fetch_all(pool)
        .await
    }

    /// Build a price map from the active catalog for the price calculator.
    pub async fn price_map(pool: &PgPool) -> Result<PriceMap, sqlx::Error> {
        let rows = sqlx::query_as::<_, (String, String, Money)>(
            "SELECT option_type, slug, price FROM options WHERE is_active = true",
        )
        .fetch_all(pool)
        .await?;

        let mut map = PriceMap::default();
        for (option_type, slug, price) in rows {
            // Rows are written through OptionDimension; unknown types are skipped.
            if let Ok(dimension) = OptionDimension::parse(&option_type) {
                map.insert(dimension, slug, price);
            }
        }
        Ok(map)
    }
}
