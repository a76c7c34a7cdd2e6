use super::*;

/// Tests paging through users.
///
/// Verifies that the total covers every row while each page holds at most
/// `limit` users ordered by id.
///
/// Expected: 3 users on page 1, 2 on page 2, total 5
#[tokio::test]
async fn slices_pages_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(factory::user::create_user(db).await?.id);
    }

    let repo = UserRepository::new(db);

    let (first, total) = repo.get_paginated(PageRequest::new(Some(1), Some(3))).await?;
    assert_eq!(total, 5);
    assert_eq!(first.iter().map(|u| u.id).collect::<Vec<_>>(), ids[..3].to_vec());

    let (second, total) = repo.get_paginated(PageRequest::new(Some(2), Some(3))).await?;
    assert_eq!(total, 5);
    assert_eq!(second.iter().map(|u| u.id).collect::<Vec<_>>(), ids[3..].to_vec());

    Ok(())
}

/// Tests requesting a page past the end.
///
/// Expected: empty page with the real total
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let (users, total) = repo.get_paginated(PageRequest::new(Some(4), Some(10))).await?;

    assert!(users.is_empty());
    assert_eq!(total, 1);

    Ok(())
}
