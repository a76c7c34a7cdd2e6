//! Bank account domain models and parameters.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use validator::Validate;

use crate::{
    model::bank_account::{BankAccountDto, CreateBankAccountDto, UpdateBankAccountDto},
    server::{
        error::{internal::InternalError, AppError},
        util::{
            document::normalize_document,
            validation::{
                not_blank, valid_account_number, valid_account_type, valid_agency, valid_document,
            },
        },
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Checking,
    Savings,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Checking => "checking",
            Self::Savings => "savings",
        }
    }
}

impl FromStr for AccountType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "checking" => Ok(Self::Checking),
            "savings" => Ok(Self::Savings),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BankAccount {
    pub id: i32,
    pub bank: String,
    pub agency: String,
    pub account: String,
    pub account_type: AccountType,
    pub balance: f64,
    pub holder_document: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BankAccount {
    pub fn from_entity(entity: entity::bank_account::Model) -> Result<Self, AppError> {
        let account_type = entity.account_type.parse::<AccountType>().map_err(|value| {
            InternalError::InvalidStoredValue {
                column: "bank_account.account_type",
                value,
            }
        })?;

        Ok(Self {
            id: entity.id,
            bank: entity.bank,
            agency: entity.agency,
            account: entity.account,
            account_type,
            balance: entity.balance,
            holder_document: entity.holder_document,
            active: entity.active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> BankAccountDto {
        BankAccountDto {
            id: self.id,
            bank: self.bank,
            agency: self.agency,
            account: self.account,
            account_type: self.account_type.to_string(),
            balance: self.balance,
            holder_document: self.holder_document,
            active: self.active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct CreateBankAccountParams {
    #[validate(
        length(min = 1, max = 100, message = "Banco deve ter entre 1 e 100 caracteres"),
        custom(function = "not_blank")
    )]
    pub bank: String,
    #[validate(custom(function = "valid_agency"))]
    pub agency: String,
    #[validate(custom(function = "valid_account_number"))]
    pub account: String,
    #[validate(custom(function = "valid_account_type"))]
    pub account_type: String,
    pub balance: f64,
    #[validate(custom(function = "valid_document"))]
    pub holder_document: Option<String>,
    pub active: bool,
}

impl CreateBankAccountParams {
    pub fn from_dto(dto: CreateBankAccountDto) -> Self {
        Self {
            bank: dto.bank.trim().to_string(),
            agency: dto.agency.trim().to_string(),
            account: dto.account.trim().to_string(),
            account_type: dto.account_type,
            balance: dto.balance.unwrap_or(0.0),
            holder_document: dto.holder_document,
            active: dto.active.unwrap_or(true),
        }
    }

    /// Holder document reduced to digits for storage.
    ///
    /// Only meaningful after validation succeeded.
    pub fn stored_document(&self) -> Option<String> {
        self.holder_document.as_deref().and_then(normalize_document)
    }
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateBankAccountParams {
    pub id: i32,
    #[validate(
        length(min = 1, max = 100, message = "Banco deve ter entre 1 e 100 caracteres"),
        custom(function = "not_blank")
    )]
    pub bank: Option<String>,
    #[validate(custom(function = "valid_agency"))]
    pub agency: Option<String>,
    #[validate(custom(function = "valid_account_number"))]
    pub account: Option<String>,
    #[validate(custom(function = "valid_account_type"))]
    pub account_type: Option<String>,
    pub balance: Option<f64>,
    #[validate(custom(function = "valid_document"))]
    pub holder_document: Option<String>,
    pub active: Option<bool>,
}

impl UpdateBankAccountParams {
    pub fn from_dto(id: i32, dto: UpdateBankAccountDto) -> Self {
        Self {
            id,
            bank: dto.bank.map(|bank| bank.trim().to_string()),
            agency: dto.agency.map(|agency| agency.trim().to_string()),
            account: dto.account.map(|account| account.trim().to_string()),
            account_type: dto.account_type,
            balance: dto.balance,
            holder_document: dto.holder_document,
            active: dto.active,
        }
    }

    pub fn stored_document(&self) -> Option<String> {
        self.holder_document.as_deref().and_then(normalize_document)
    }
}
