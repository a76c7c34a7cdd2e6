use super::*;

/// Tests changing the email to one owned by another user.
///
/// Expected: Err(BusinessLogic) with 409
#[tokio::test]
async fn rejects_email_of_another_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;
    let user = factory::user::create_user(db).await?;

    let service = UserService::new(db, test_hasher());
    let result = service
        .update(UpdateUserParams::from_dto(
            user.id,
            UpdateUserDto {
                email: Some("taken@example.com".to_string()),
                ..Default::default()
            },
        ))
        .await;

    assert!(matches!(
        result,
        Err(AppError::BusinessLogic { status, .. }) if status == StatusCode::CONFLICT
    ));

    Ok(())
}

/// Tests keeping the same email while changing the name.
///
/// Expected: Ok(User) with the new name
#[tokio::test]
async fn allows_own_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = UserService::new(db, test_hasher());
    let updated = service
        .update(UpdateUserParams::from_dto(
            user.id,
            UpdateUserDto {
                name: Some("Nova Ana".to_string()),
                email: Some(user.email.clone()),
                role: Some("admin".to_string()),
                ..Default::default()
            },
        ))
        .await?;

    assert_eq!(updated.name, "Nova Ana");
    assert_eq!(updated.email, user.email);
    assert!(updated.is_admin());

    Ok(())
}

/// Tests updating a missing user.
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
    let result = service
        .update(UpdateUserParams::from_dto(55, UpdateUserDto::default()))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
