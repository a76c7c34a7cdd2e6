use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::model::{
    bank_account::{CreateBankAccountParams, UpdateBankAccountParams},
    pagination::PageRequest,
};

pub struct BankAccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BankAccountRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new bank account, storing the holder document as digits only
    pub async fn create(
        &self,
        params: CreateBankAccountParams,
    ) -> Result<entity::bank_account::Model, DbErr> {
        let now = Utc::now();
        let holder_document = params.stored_document();

        entity::bank_account::ActiveModel {
            bank: ActiveValue::Set(params.bank),
            agency: ActiveValue::Set(params.agency),
            account: ActiveValue::Set(params.account),
            account_type: ActiveValue::Set(params.account_type),
            balance: ActiveValue::Set(params.balance),
            holder_document: ActiveValue::Set(holder_document),
            active: ActiveValue::Set(params.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::bank_account::Model>, DbErr> {
        entity::prelude::BankAccount::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn get_paginated(
        &self,
        request: PageRequest,
    ) -> Result<(Vec<entity::bank_account::Model>, u64), DbErr> {
        let paginator = entity::prelude::BankAccount::find()
            .order_by_asc(entity::bank_account::Column::Id)
            .paginate(self.db, request.limit);

        let total = paginator.num_items().await?;
        if request.is_past_end(total) {
            return Ok((Vec::new(), total));
        }

        let accounts = paginator.fetch_page(request.index()).await?;

        Ok((accounts, total))
    }

    pub async fn update(
        &self,
        params: UpdateBankAccountParams,
    ) -> Result<Option<entity::bank_account::Model>, DbErr> {
        let Some(account) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let holder_document = params.stored_document();
        let mut active_model: entity::bank_account::ActiveModel = account.into();
        if let Some(bank) = params.bank {
            active_model.bank = ActiveValue::Set(bank);
        }
        if let Some(agency) = params.agency {
            active_model.agency = ActiveValue::Set(agency);
        }
        if let Some(number) = params.account {
            active_model.account = ActiveValue::Set(number);
        }
        if let Some(account_type) = params.account_type {
            active_model.account_type = ActiveValue::Set(account_type);
        }
        if let Some(balance) = params.balance {
            active_model.balance = ActiveValue::Set(balance);
        }
        if holder_document.is_some() {
            active_model.holder_document = ActiveValue::Set(holder_document);
        }
        if let Some(active) = params.active {
            active_model.active = ActiveValue::Set(active);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BankAccount::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::BankAccount::find().count(self.db).await
    }
}
