use super::*;

/// Tests deleting a product that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);

    assert!(!repo.delete(42).await?);

    Ok(())
}

/// Tests deleting an existing product.
///
/// Expected: Ok(true) and the product is gone
#[tokio::test]
async fn deletes_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);

    assert!(repo.delete(product.id).await?);
    assert!(repo.find_by_id(product.id).await?.is_none());

    Ok(())
}
