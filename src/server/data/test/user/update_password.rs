use super::*;

/// Tests replacing the stored password hash.
///
/// Expected: true for an existing user, false for a missing one
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.update_password(user.id, "new-hash".to_string()).await?);
    assert!(!repo.update_password(999, "new-hash".to_string()).await?);

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password, "new-hash");

    Ok(())
}
