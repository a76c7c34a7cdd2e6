use super::*;

/// Tests creating a user through the service.
///
/// Verifies defaults are applied and the stored password is a bcrypt hash rather
/// than the plain text.
///
/// Expected: Ok(User) with role user and a hash that verifies
#[tokio::test]
async fn creates_user_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db, test_hasher());
    let user = service.create(create_params("Ana@Example.com")).await?;

    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.role, Role::User);
    assert!(user.is_active());
    assert_ne!(user.password_hash, "secret1");
    assert!(test_hasher().verify("secret1", &user.password_hash).await?);

    Ok(())
}

/// Tests creating a user with an email that is already registered.
///
/// Expected: Err(BusinessLogic) with 409
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ana@example.com")
        .build()
        .await?;

    let service = UserService::new(db, test_hasher());
    let result = service.create(create_params(" ANA@example.com")).await;

    match result {
        Err(AppError::BusinessLogic { status, message }) => {
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(message, "E-mail já cadastrado");
        }
        other => panic!("Expected conflict, got: {:?}", other),
    }

    Ok(())
}

/// Tests validation runs before anything is written.
///
/// Expected: Err(Validation) listing the password field, no user stored
#[tokio::test]
async fn rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = create_params("ana@example.com");
    params.password = "123".to_string();

    let service = UserService::new(db, test_hasher());
    let result = service.create(params).await;

    match result {
        Err(AppError::Validation(errors)) => assert!(errors.contains_key("password")),
        other => panic!("Expected validation error, got: {:?}", other),
    }
    assert_eq!(service.list(PageRequest::default()).await?.total, 0);

    Ok(())
}

/// Tests the mapping of a database unique violation on email.
///
/// Verifies that an insert racing past the `email_taken` check surfaces as the same
/// conflict instead of an internal error.
///
/// Expected: Err(BusinessLogic) with 409 and the duplicate email message
#[tokio::test]
async fn maps_unique_violation_to_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let params = create_params("ana@example.com");
    repo.create(&params, "hash".to_string()).await?;

    let err = repo
        .create(&params, "hash".to_string())
        .await
        .expect_err("second insert violates the unique email");

    match map_unique_violation(err) {
        AppError::BusinessLogic { status, message } => {
            assert_eq!(status, StatusCode::CONFLICT);
            assert_eq!(message, "E-mail já cadastrado");
        }
        other => panic!("Expected conflict, got {other:?}"),
    }

    Ok(())
}
