use super::*;

/// Tests deactivating a product.
///
/// Expected: Ok(Product) with the inactive status
#[tokio::test]
async fn deactivates_product() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let service = ProductService::new(db);
    let updated = service
        .update(UpdateProductParams::from_dto(
            product.id,
            UpdateProductDto {
                status: Some("inactive".to_string()),
                ..Default::default()
            },
        ))
        .await?;

    assert_eq!(updated.status, RecordStatus::Inactive);
    assert_eq!(updated.name, product.name);

    Ok(())
}

/// Tests an unknown status value.
///
/// Expected: Err(Validation) on status
#[tokio::test]
async fn rejects_unknown_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_product(db).await?;

    let service = ProductService::new(db);
    let result = service
        .update(UpdateProductParams::from_dto(
            product.id,
            UpdateProductDto {
                status: Some("archived".to_string()),
                ..Default::default()
            },
        ))
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
