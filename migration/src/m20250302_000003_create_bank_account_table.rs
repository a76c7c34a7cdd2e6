use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BankAccount::Table)
                    .if_not_exists()
                    .col(pk_auto(BankAccount::Id))
                    .col(string(BankAccount::Bank))
                    .col(string(BankAccount::Agency))
                    .col(string(BankAccount::Account))
                    .col(string(BankAccount::AccountType))
                    .col(double(BankAccount::Balance).default(0.0))
                    .col(string_null(BankAccount::HolderDocument))
                    .col(boolean(BankAccount::Active).default(true))
                    .col(
                        timestamp_with_time_zone(BankAccount::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(BankAccount::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BankAccount::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BankAccount {
    Table,
    Id,
    Bank,
    Agency,
    Account,
    AccountType,
    Balance,
    HolderDocument,
    Active,
    CreatedAt,
    UpdatedAt,
}
