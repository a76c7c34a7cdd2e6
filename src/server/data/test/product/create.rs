use super::*;

/// Tests creating a product.
///
/// Expected: Ok with the product stored and counted
#[tokio::test]
async fn creates_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);
    let product = repo
        .create(CreateProductParams {
            name: "Caneta".to_string(),
            price: 2.5,
            category: "papelaria".to_string(),
            status: "active".to_string(),
        })
        .await?;

    assert_eq!(product.name, "Caneta");
    assert_eq!(product.price, 2.5);
    assert!(!product.uuid.is_empty());
    assert_eq!(repo.count().await?, 1);

    let found = repo.find_by_id(product.id).await?;
    assert_eq!(found.map(|p| p.uuid), Some(product.uuid));

    Ok(())
}
