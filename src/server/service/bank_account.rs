use sea_orm::DatabaseConnection;
use validator::Validate;

use crate::server::{
    data::bank_account::BankAccountRepository,
    error::AppError,
    model::{
        bank_account::{BankAccount, CreateBankAccountParams, UpdateBankAccountParams},
        pagination::{PageRequest, Paginated},
    },
};

fn account_not_found() -> AppError {
    AppError::NotFound("Conta bancária não encontrada".to_string())
}

pub struct BankAccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BankAccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, request: PageRequest) -> Result<Paginated<BankAccount>, AppError> {
        let (accounts, total) = BankAccountRepository::new(self.db)
            .get_paginated(request)
            .await?;

        let accounts = accounts
            .into_iter()
            .map(BankAccount::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::new(accounts, total, request))
    }

    pub async fn get(&self, id: i32) -> Result<BankAccount, AppError> {
        let account = BankAccountRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(account_not_found)?;

        BankAccount::from_entity(account)
    }

    /// Creates an account; the holder document is stored as digits only.
    pub async fn create(&self, params: CreateBankAccountParams) -> Result<BankAccount, AppError> {
        params.validate()?;

        let account = BankAccountRepository::new(self.db).create(params).await?;

        BankAccount::from_entity(account)
    }

    pub async fn update(&self, params: UpdateBankAccountParams) -> Result<BankAccount, AppError> {
        params.validate()?;

        let account = BankAccountRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(account_not_found)?;

        BankAccount::from_entity(account)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !BankAccountRepository::new(self.db).delete(id).await? {
            return Err(account_not_found());
        }

        Ok(())
    }
}
