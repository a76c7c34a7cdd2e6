use super::*;

/// Tests deleting a user twice.
///
/// Expected: Ok then Err(NotFound)
#[tokio::test]
async fn second_delete_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = UserService::new(db, test_hasher());
    service.delete(user.id).await?;

    assert!(matches!(
        service.delete(user.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
