use super::*;

/// Tests paging through products.
///
/// Expected: second page of size 2 holds the third product only
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::create_product(db).await?;
    factory::product::create_product(db).await?;
    let last = factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let (products, total) = repo
        .get_paginated(PageRequest::new(Some(2), Some(2)))
        .await?;

    assert_eq!(total, 3);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, last.id);

    Ok(())
}

/// Tests requesting a page whose offset overflows.
///
/// Verifies the repository reports the real total and returns no rows instead of
/// handing an overflowing offset to the paginator.
///
/// Expected: Ok((empty, 2))
#[tokio::test]
async fn returns_empty_page_for_huge_page_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::create_product(db).await?;
    factory::product::create_product(db).await?;

    let repo = ProductRepository::new(db);
    let (products, total) = repo
        .get_paginated(PageRequest::new(Some(u64::MAX), Some(10)))
        .await?;

    assert_eq!(total, 2);
    assert!(products.is_empty());

    Ok(())
}
