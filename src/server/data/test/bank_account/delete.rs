use super::*;

/// Tests deleting a bank account.
///
/// Verifies only the targeted row is removed and a repeated delete reports nothing
/// deleted.
///
/// Expected: true, then false, with one account left
#[tokio::test]
async fn deletes_only_target_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BankAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BankAccountRepository::new(db);
    let target = repo.create(create_params(None)).await?;
    repo.create(create_params(Some("529.982.247-25"))).await?;
    assert_eq!(repo.count().await?, 2);

    assert!(repo.delete(target.id).await?);
    assert!(!repo.delete(target.id).await?);
    assert_eq!(repo.count().await?, 1);
    assert!(repo.find_by_id(target.id).await?.is_none());

    Ok(())
}
