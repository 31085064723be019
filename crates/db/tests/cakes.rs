//! Integration tests for the cake product repository.

use sqlx::PgPool;

use cakebox_db::models::cake::{CreateCake, UpdateCake};
use cakebox_db::repositories::CakeRepo;

fn new_cake(name: &str, base_price: i64) -> CreateCake {
    CreateCake {
        name: name.to_string(),
        base_price,
        allowed_shapes: vec![],
        allowed_flavors: vec![],
        allowed_colors: vec![],
        allowed_designs: vec![],
        is_active: None,
        images: vec![],
        description: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_cake_crud(pool: PgPool) {
    let input = CreateCake {
        allowed_shapes: vec!["round".to_string(), "heart".to_string()],
        images: vec!["https://img.example/velvet-1.jpg".to_string()],
        description: Some("Two-layer red velvet".to_string()),
        ..new_cake("Red Velvet Dream", 450)
    };
    let cake = CakeRepo::create(&pool, &input).await.unwrap();
    assert_eq!(cake.name, "Red Velvet Dream");
    assert_eq!(cake.base_price, 450);
    assert_eq!(cake.allowed_shapes, vec!["round", "heart"]);
    assert!(cake.allowed_designs.is_empty());
    assert!(cake.is_active);

    let found = CakeRepo::find_by_id(&pool, cake.id)
        .await
        .unwrap()
        .expect("cake should exist");
    assert_eq!(found.images.len(), 1);

    let updated = CakeRepo::update(
        &pool,
        cake.id,
        &UpdateCake {
            name: None,
            base_price: Some(500),
            allowed_shapes: Some(vec!["square".to_string()]),
            allowed_flavors: None,
            allowed_colors: None,
            allowed_designs: None,
            is_active: None,
            images: None,
            description: None,
        },
    )
    .await
    .unwrap()
    .expect("update should return the row");
    assert_eq!(updated.base_price, 500);
    // Present allow-list replaces wholesale; absent ones are untouched.
    assert_eq!(updated.allowed_shapes, vec!["square"]);
    assert_eq!(updated.name, "Red Velvet Dream");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_storefront_list_hides_deactivated(pool: PgPool) {
    let kept = CakeRepo::create(&pool, &new_cake("Classic Vanilla", 300))
        .await
        .unwrap();
    let retired = CakeRepo::create(&pool, &new_cake("Seasonal Mango", 350))
        .await
        .unwrap();

    let deactivated = CakeRepo::deactivate(&pool, retired.id).await.unwrap();
    assert!(deactivated);
    // Already inactive: a second deactivation is a no-op.
    assert!(!CakeRepo::deactivate(&pool, retired.id).await.unwrap());

    let storefront = CakeRepo::list(&pool, false).await.unwrap();
    assert!(storefront.iter().any(|c| c.id == kept.id));
    assert!(storefront.iter().all(|c| c.id != retired.id));

    let admin_view = CakeRepo::list(&pool, true).await.unwrap();
    assert!(admin_view.iter().any(|c| c.id == retired.id));

    // The row itself survives; only the flag flips.
    let row = CakeRepo::find_by_id(&pool, retired.id)
        .await
        .unwrap()
        .expect("deactivated cake still exists");
    assert!(!row.is_active);
}
