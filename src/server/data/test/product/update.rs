use super::*;

/// Tests updating the price of a product.
///
/// Expected: Ok(Some) with the new price and the original name
#[tokio::test]
async fn updates_price() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .name("Caderno")
        .price(15.0)
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let updated = repo
        .update(UpdateProductParams {
            id: product.id,
            name: None,
            price: Some(12.9),
            category: None,
            status: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.price, 12.9);
    assert_eq!(updated.name, "Caderno");

    Ok(())
}
