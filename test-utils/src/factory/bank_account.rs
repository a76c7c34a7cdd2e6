//! Bank account factory for creating test bank account entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bank accounts with customizable fields.
pub struct BankAccountFactory<'a> {
    db: &'a DatabaseConnection,
    bank: String,
    agency: String,
    account: String,
    account_type: String,
    balance: f64,
    holder_document: Option<String>,
    active: bool,
}

impl<'a> BankAccountFactory<'a> {
    /// Creates a new BankAccountFactory with default values.
    ///
    /// Defaults:
    /// - bank: `"Banco Teste"`
    /// - agency: `"0001"`
    /// - account: `"{id}-0"` padded to five digits
    /// - account_type: `"checking"`
    /// - balance: `0.0`
    /// - holder_document: `None`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            bank: "Banco Teste".to_string(),
            agency: "0001".to_string(),
            account: format!("{:05}-0", id),
            account_type: "checking".to_string(),
            balance: 0.0,
            holder_document: None,
            active: true,
        }
    }

    pub fn bank(mut self, bank: impl Into<String>) -> Self {
        self.bank = bank.into();
        self
    }

    pub fn account_type(mut self, account_type: impl Into<String>) -> Self {
        self.account_type = account_type.into();
        self
    }

    pub fn balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn holder_document(mut self, document: impl Into<String>) -> Self {
        self.holder_document = Some(document.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the bank account entity into the database.
    pub async fn build(self) -> Result<entity::bank_account::Model, DbErr> {
        let now = Utc::now();
        entity::bank_account::ActiveModel {
            bank: ActiveValue::Set(self.bank),
            agency: ActiveValue::Set(self.agency),
            account: ActiveValue::Set(self.account),
            account_type: ActiveValue::Set(self.account_type),
            balance: ActiveValue::Set(self.balance),
            holder_document: ActiveValue::Set(self.holder_document),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a bank account with default values.
pub async fn create_bank_account(
    db: &DatabaseConnection,
) -> Result<entity::bank_account::Model, DbErr> {
    BankAccountFactory::new(db).build().await
}
