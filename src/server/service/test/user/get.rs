use super::*;

/// Tests reading a missing user.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db, test_hasher());
    let result = service.get(12).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests reading an existing admin.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn returns_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;

    let service = UserService::new(db, test_hasher());
    let user = service.get(admin.id).await?;

    assert!(user.is_admin());
    assert_eq!(user.uuid, admin.uuid);

    Ok(())
}
