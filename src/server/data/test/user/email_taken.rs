use super::*;

/// Tests email ownership checks.
///
/// Verifies that an email counts as taken for new users and for other users,
/// but not for the user that already owns it.
///
/// Expected: true, true, false
#[tokio::test]
async fn ignores_the_excluded_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::UserFactory::new(db)
        .email("owner@example.com")
        .build()
        .await?;
    let other = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);

    assert!(repo.email_taken("owner@example.com", None).await?);
    assert!(repo.email_taken("owner@example.com", Some(other.id)).await?);
    assert!(!repo.email_taken("owner@example.com", Some(owner.id)).await?);
    assert!(!repo.email_taken("free@example.com", None).await?);

    Ok(())
}
