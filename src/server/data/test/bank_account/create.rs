use super::*;

/// Tests creating a bank account with a formatted CNPJ.
///
/// Verifies that punctuation is stripped from the holder document before storage.
///
/// Expected: Ok with holder_document "11222333000181"
#[tokio::test]
async fn stores_document_digits_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BankAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BankAccountRepository::new(db);
    let account = repo
        .create(create_params(Some("11.222.333/0001-81")))
        .await?;

    assert_eq!(account.holder_document.as_deref(), Some("11222333000181"));
    assert_eq!(account.balance, 150.0);
    assert_eq!(account.account_type, "savings");

    Ok(())
}

/// Tests creating a bank account without a holder document.
///
/// Expected: Ok with holder_document None
#[tokio::test]
async fn allows_missing_document() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BankAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BankAccountRepository::new(db);
    let account = repo.create(create_params(None)).await?;

    assert!(account.holder_document.is_none());
    assert!(account.active);

    Ok(())
}
