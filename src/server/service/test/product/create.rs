use super::*;

/// Tests creating a product with the default status.
///
/// Expected: Ok(Product) active and listed
#[tokio::test]
async fn creates_active_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProductService::new(db);
    let product = service
        .create(CreateProductParams::from_dto(CreateProductDto {
            name: "Caneta".to_string(),
            price: 2.5,
            category: "papelaria".to_string(),
            status: None,
        }))
        .await?;

    assert_eq!(product.status, RecordStatus::Active);

    let page = service.list(PageRequest::default()).await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, product.id);

    Ok(())
}

/// Tests a zero price.
///
/// Expected: Err(Validation) on price
#[tokio::test]
async fn rejects_zero_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ProductService::new(db);
    let result = service
        .create(CreateProductParams::from_dto(CreateProductDto {
            name: "Brinde".to_string(),
            price: 0.0,
            category: "promo".to_string(),
            status: None,
        }))
        .await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.contains_key("price")),
        other => panic!("Expected validation error, got: {:?}", other),
    }

    Ok(())
}
