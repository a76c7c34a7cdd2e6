use super::*;

/// Tests deleting a user.
///
/// Verifies the row is removed and a second delete reports nothing deleted.
///
/// Expected: true then false
#[tokio::test]
async fn deletes_user_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.delete(user.id).await?);
    assert!(!repo.delete(user.id).await?);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
