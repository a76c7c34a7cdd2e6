use super::*;

/// Tests pagination totals computed by the service.
///
/// Expected: 7 users with limit 3 give 3 pages, the last holding one user
#[tokio::test]
async fn computes_total_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..7 {
        factory::user::create_user(db).await?;
    }

    let service = UserService::new(db, test_hasher());
    let page = service.list(PageRequest::new(Some(3), Some(3))).await?;

    assert_eq!(page.total, 7);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.page, 3);
    assert_eq!(page.items.len(), 1);

    Ok(())
}

/// Tests an empty table.
///
/// Expected: zero total pages
#[tokio::test]
async fn empty_table_has_no_pages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db, test_hasher());
    let page = service.list(PageRequest::default()).await?;

    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());

    Ok(())
}
