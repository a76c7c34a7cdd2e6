use super::*;

/// Tests an admin deactivating and reactivating another user.
///
/// Expected: Ok(User) with the requested status each time
#[tokio::test]
async fn toggles_user_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;
    let user = factory::user::create_user(db).await?;

    let service = AuthService::new(db, test_hasher());

    let deactivated = service
        .set_status(admin.id, user.id, RecordStatus::Inactive)
        .await?;
    assert!(!deactivated.is_active());

    let activated = service
        .set_status(admin.id, user.id, RecordStatus::Active)
        .await?;
    assert!(activated.is_active());

    Ok(())
}

/// Tests an admin deactivating their own account.
///
/// Expected: Err(BusinessLogic)
#[tokio::test]
async fn admin_cannot_deactivate_self() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::create_admin(db).await?;

    let service = AuthService::new(db, test_hasher());
    let result = service
        .set_status(admin.id, admin.id, RecordStatus::Inactive)
        .await;

    assert!(matches!(result, Err(AppError::BusinessLogic { .. })));

    Ok(())
}

/// Tests changing the status of a missing user.
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

    let admin = factory::user::create_admin(db).await?;

    let service = AuthService::new(db, test_hasher());
    let result = service
        .set_status(admin.id, admin.id + 100, RecordStatus::Active)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
