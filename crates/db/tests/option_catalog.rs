//! Integration tests for the option catalog repository.
//!
//! Exercises CRUD, price-sorted listing, the `(type, slug)` uniqueness
//! constraint, seeding idempotence, and price-map construction against a
//! real database.

use sqlx::PgPool;

use cakebox_core::options::OptionDimension;
use cakebox_db::models::option::{CreateOption, UpdateOption};
use cakebox_db::repositories::OptionRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_option(option_type: &str, slug: &str, name: &str, price: i64) -> CreateOption {
    CreateOption {
        option_type: option_type.to_string(),
        slug: Some(slug.to_string()),
        name: name.to_string(),
        price,
        is_active: None,
        image: None,
        metadata: None,
    }
}

async fn create(pool: &PgPool, option_type: &str, slug: &str, price: i64) {
    let input = new_option(option_type, slug, slug, price);
    OptionRepo::create(pool, &input, slug).await.unwrap();
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_option_crud(pool: PgPool) {
    let input = new_option("design", "spiral", "Spiral", 12);
    let option = OptionRepo::create(&pool, &input, "spiral").await.unwrap();
    assert_eq!(option.option_type, "design");
    assert_eq!(option.slug, "spiral");
    assert_eq!(option.price, 12);
    assert!(option.is_active);

    let found = OptionRepo::find_by_id(&pool, option.id)
        .await
        .unwrap()
        .expect("option should exist");
    assert_eq!(found.name, "Spiral");

    let updated = OptionRepo::update(
        &pool,
        option.id,
        &UpdateOption {
            name: None,
            price: Some(20),
            is_active: Some(false),
            image: None,
            metadata: None,
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");
    assert_eq!(updated.price, 20);
    assert!(!updated.is_active);
    assert_eq!(updated.name, "Spiral"); // unchanged

    let deleted = OptionRepo::delete(&pool, option.id).await.unwrap();
    assert!(deleted);
    assert!(OptionRepo::find_by_id(&pool, option.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_missing_option_returns_none(pool: PgPool) {
    let result = OptionRepo::update(
        &pool,
        9999,
        &UpdateOption {
            name: Some("Ghost".to_string()),
            price: None,
            is_active: None,
            image: None,
            metadata: None,
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_list_sorted_by_price_then_insertion(pool: PgPool) {
    create(&pool, "flavor", "pistachio", 6).await;
    create(&pool, "flavor", "vanilla", 0).await;
    // Same price as pistachio, inserted later: must sort after it.
    create(&pool, "flavor", "hazelnut", 6).await;

    let listed = OptionRepo::list(&pool, Some(OptionDimension::Flavor))
        .await
        .unwrap();
    let slugs: Vec<&str> = listed.iter().map(|o| o.slug.as_str()).collect();
    assert_eq!(slugs, vec!["vanilla", "pistachio", "hazelnut"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_inactive_options_hidden_from_list(pool: PgPool) {
    let input = CreateOption {
        is_active: Some(false),
        ..new_option("color", "charcoal", "Charcoal", 3)
    };
    OptionRepo::create(&pool, &input, "charcoal").await.unwrap();
    create(&pool, "color", "pastel_red", 0).await;

    let active = OptionRepo::list(&pool, Some(OptionDimension::Color))
        .await
        .unwrap();
    assert!(active.iter().all(|o| o.slug != "charcoal"));

    let all = OptionRepo::list_all(&pool, Some(OptionDimension::Color))
        .await
        .unwrap();
    assert!(all.iter().any(|o| o.slug == "charcoal"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_without_dimension_spans_types(pool: PgPool) {
    create(&pool, "shape", "round", 0).await;
    create(&pool, "flavor", "vanilla", 0).await;

    let listed = OptionRepo::list(&pool, None).await.unwrap();
    assert_eq!(listed.len(), 2);
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_type_slug_rejected(pool: PgPool) {
    create(&pool, "color", "pastel_red", 0).await;

    let duplicate = new_option("color", "pastel_red", "Pastel Red Again", 2);
    let err = OptionRepo::create(&pool, &duplicate, "pastel_red")
        .await
        .expect_err("second create of (color, pastel_red) must fail");

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_options_type_slug"));
        }
        other => panic!("expected a unique violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_same_slug_allowed_across_types(pool: PgPool) {
    create(&pool, "shape", "classic", 0).await;
    // Same slug under a different dimension is a distinct option.
    create(&pool, "design", "classic", 0).await;

    let listed = OptionRepo::list(&pool, None).await.unwrap();
    assert_eq!(listed.len(), 2);
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_defaults_idempotent(pool: PgPool) {
    let first = OptionRepo::seed_defaults(&pool).await.unwrap();
    assert_eq!(first, 24);

    let after_first = OptionRepo::list_all(&pool, None).await.unwrap();

    let second = OptionRepo::seed_defaults(&pool).await.unwrap();
    assert_eq!(second, first);

    let after_second = OptionRepo::list_all(&pool, None).await.unwrap();
    assert_eq!(after_first.len(), after_second.len());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_seed_restores_edited_entries(pool: PgPool) {
    OptionRepo::seed_defaults(&pool).await.unwrap();

    let listed = OptionRepo::list_all(&pool, Some(OptionDimension::Design))
        .await
        .unwrap();
    let drip = listed.iter().find(|o| o.slug == "drip").unwrap();

    OptionRepo::update(
        &pool,
        drip.id,
        &UpdateOption {
            name: None,
            price: Some(99),
            is_active: Some(false),
            image: None,
            metadata: None,
        },
    )
    .await
    .unwrap();

    OptionRepo::seed_defaults(&pool).await.unwrap();

    let restored = OptionRepo::find_by_id(&pool, drip.id).await.unwrap().unwrap();
    assert_eq!(restored.price, 15);
    assert!(restored.is_active);
}

// ---------------------------------------------------------------------------
// Price map / slugs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_price_map_reflects_active_catalog(pool: PgPool) {
    OptionRepo::seed_defaults(&pool).await.unwrap();

    let map = OptionRepo::price_map(&pool).await.unwrap();
    assert_eq!(map.delta(OptionDimension::Design, "drip"), 15);
    assert_eq!(map.delta(OptionDimension::Flavor, "red_velvet"), 8);

    // Deactivate drip: it must drop out of the map (delta falls to 0).
    let listed = OptionRepo::list_all(&pool, Some(OptionDimension::Design))
        .await
        .unwrap();
    let drip = listed.iter().find(|o| o.slug == "drip").unwrap();
    OptionRepo::update(
        &pool,
        drip.id,
        &UpdateOption {
            name: None,
            price: None,
            is_active: Some(false),
            image: None,
            metadata: None,
        },
    )
    .await
    .unwrap();

    let map = OptionRepo::price_map(&pool).await.unwrap();
    assert_eq!(map.delta(OptionDimension::Design, "drip"), 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_active_slugs_in_catalog_order(pool: PgPool) {
    create(&pool, "shape", "round", 0).await;
    create(&pool, "shape", "heart", 10).await;
    create(&pool, "shape", "square", 5).await;

    let slugs = OptionRepo::active_slugs(&pool, OptionDimension::Shape)
        .await
        .unwrap();
    assert_eq!(slugs, vec!["round", "square", "heart"]);
}
