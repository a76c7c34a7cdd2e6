use super::*;

/// Tests creating a new user.
///
/// Verifies that the repository stores the given hash instead of the plain password
/// and assigns a uuid and timestamps.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user_with_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(&create_params("ana@example.com"), "$2b$04$hash".to_string())
        .await?;

    assert_eq!(user.email, "ana@example.com");
    assert_eq!(user.password, "$2b$04$hash");
    assert_eq!(user.uuid.len(), 36);
    assert_eq!(user.created_at, user.updated_at);

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Verifies that inserting a second user with the same email fails at the
/// database level.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
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

    let repo = UserRepository::new(db);
    let result = repo
        .create(&create_params("ana@example.com"), "hash".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
