use super::*;

/// Tests a partial update.
///
/// Verifies that only provided fields change and `updated_at` moves forward.
///
/// Expected: Ok(Some) with the new name and unchanged email
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(UpdateUserParams {
            id: user.id,
            name: Some("Renamed".to_string()),
            email: None,
            role: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.uuid, user.uuid);
    assert!(updated.updated_at >= user.updated_at);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .update(UpdateUserParams {
            id: 999,
            name: Some("Ghost".to_string()),
            email: None,
            role: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
