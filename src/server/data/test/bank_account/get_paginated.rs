use super::*;

/// Tests listing bank accounts with the default page.
///
/// Expected: every account returned with matching total
#[tokio::test]
async fn lists_all_accounts_on_default_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BankAccount)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::bank_account::create_bank_account(db).await?;
    }

    let repo = BankAccountRepository::new(db);
    let (accounts, total) = repo.get_paginated(PageRequest::default()).await?;

    assert_eq!(total, 3);
    assert_eq!(accounts.len(), 3);
    assert!(accounts.windows(2).all(|pair| pair[0].id < pair[1].id));

    Ok(())
}
