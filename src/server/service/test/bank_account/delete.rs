use super::*;

/// Tests deleting an account and reading it back.
///
/// Expected: delete Ok, then get Err(NotFound)
#[tokio::test]
async fn deleted_account_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BankAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::bank_account::create_bank_account(db).await?;

    let service = BankAccountService::new(db);
    service.delete(account.id).await?;

    assert!(matches!(
        service.get(account.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
